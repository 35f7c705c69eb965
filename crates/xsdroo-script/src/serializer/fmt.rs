use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr ),* $(,)?) => {{
        $(
            $fragments.to_script($f);
        )*
    }};
}

pub(super) trait ToScript {
    fn to_script(self, f: &mut Formatter<'_>);
}

impl ToScript for &str {
    fn to_script(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToScript for &String {
    fn to_script(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl<T: ToScript> ToScript for Option<T> {
    fn to_script(self, f: &mut Formatter<'_>) {
        if let Some(fragment) = self {
            fragment.to_script(f);
        }
    }
}
