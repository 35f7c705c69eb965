mod emitter;
pub use emitter::Emitter;

use crate::{stmt::Statement, Serializer};

/// An ordered list of statements, rendered one per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    statements: Vec<Statement>,
}

/// The two scripts generated for a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scripts {
    /// Creates a project from scratch.
    pub full: Script,

    /// Re-applies the entities and relationships to an existing project.
    pub update: Script,
}

impl Script {
    pub fn new() -> Script {
        Script::default()
    }

    pub fn push(&mut self, stmt: impl Into<Statement>) {
        self.statements.push(stmt.into());
    }

    pub fn extend(&mut self, stmts: impl IntoIterator<Item = Statement>) {
        self.statements.extend(stmts);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Statements the scaffolding tool executes, skipping comments and
    /// layout.
    pub fn commands(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.statements.iter().filter(|stmt| stmt.is_command())
    }

    /// Renders the script, terminating every line with `\n`.
    pub fn render(&self, serializer: &Serializer<'_>) -> String {
        let mut dst = String::new();

        for stmt in &self.statements {
            dst.push_str(&serializer.serialize(stmt));
            dst.push('\n');
        }

        dst
    }
}
