use super::Statement;

/// A boxed comment heading a section of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub lines: Vec<String>,
}

impl Statement {
    pub fn banner(title: &str) -> Self {
        Banner {
            lines: vec![title.to_string()],
        }
        .into()
    }

    pub fn banner_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Banner {
            lines: lines.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<Banner> for Statement {
    fn from(value: Banner) -> Self {
        Self::Banner(value)
    }
}
