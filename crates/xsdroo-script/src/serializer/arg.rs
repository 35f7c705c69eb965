use super::{Formatter, ToScript};
use std::fmt::{Display, Write};

/// ` --name value`, when a value is present.
pub(super) struct Arg<'a, T>(pub(super) &'a str, pub(super) Option<T>);

/// ` --name`, when set.
pub(super) struct Flag<'a>(pub(super) &'a str, pub(super) bool);

impl<T: Display> ToScript for Arg<'_, T> {
    fn to_script(self, f: &mut Formatter<'_>) {
        if let Some(value) = self.1 {
            // Writing to a `String` does not fail
            let _ = write!(f.dst, " --{} {}", self.0, value);
        }
    }
}

impl ToScript for Flag<'_> {
    fn to_script(self, f: &mut Formatter<'_>) {
        if self.1 {
            f.dst.push_str(" --");
            f.dst.push_str(self.0);
        }
    }
}
