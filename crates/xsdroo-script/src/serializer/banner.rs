use super::{Formatter, ToScript};
use crate::stmt::Banner;

impl ToScript for &Banner {
    fn to_script(self, f: &mut Formatter<'_>) {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let rule = "#".repeat(width + 4);

        fmt!(f, &rule);
        for line in &self.lines {
            let pad = " ".repeat(width - line.chars().count());
            fmt!(f, "\n# ", line, &pad, " #");
        }
        fmt!(f, "\n", &rule);
    }
}
