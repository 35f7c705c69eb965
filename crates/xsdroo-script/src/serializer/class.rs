use super::{Formatter, ToScript};

/// A class name qualified with the serializer's package.
pub(super) struct Class<'a>(pub(super) &'a str);

impl ToScript for Class<'_> {
    fn to_script(self, f: &mut Formatter<'_>) {
        let qualified = f.serializer.package.qualify(self.0);
        f.dst.push_str(&qualified);
    }
}
