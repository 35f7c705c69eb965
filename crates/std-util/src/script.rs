//! Helpers for inspecting generated command scripts.

pub trait ScriptUtil {
    /// Lines that are neither blank nor comments.
    fn commands(&self) -> Vec<&str>;

    /// Commands starting with `prefix`.
    fn commands_starting_with(&self, prefix: &str) -> Vec<&str>;

    /// Returns `true` if some line equals `line`, ignoring surrounding
    /// whitespace.
    fn has_line(&self, line: &str) -> bool;

    /// Zero-based index of the first line equal to `line`.
    fn line_index(&self, line: &str) -> Option<usize>;
}

impl ScriptUtil for str {
    fn commands(&self) -> Vec<&str> {
        self.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    fn commands_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.commands()
            .into_iter()
            .filter(|line| line.starts_with(prefix))
            .collect()
    }

    fn has_line(&self, line: &str) -> bool {
        self.line_index(line).is_some()
    }

    fn line_index(&self, line: &str) -> Option<usize> {
        self.lines().position(|l| l.trim() == line.trim())
    }
}

/// Asserts that a script contains the given line.
#[macro_export]
macro_rules! assert_line {
    ($script:expr, $line:expr) => {{
        let script = &$script;
        let script: &str = script.as_ref();
        let line = &$line;
        let line: &str = line.as_ref();
        if !$crate::script::ScriptUtil::has_line(script, line) {
            panic!("expected line `{}` in script:\n{}", line, script);
        }
    }};
}

/// Asserts that a script does not contain the given line.
#[macro_export]
macro_rules! assert_no_line {
    ($script:expr, $line:expr) => {{
        let script = &$script;
        let script: &str = script.as_ref();
        let line = &$line;
        let line: &str = line.as_ref();
        if $crate::script::ScriptUtil::has_line(script, line) {
            panic!("unexpected line `{}` in script:\n{}", line, script);
        }
    }};
}
