mod options;
pub use options::{Database, Options, WebOptions};

pub mod script;
pub use script::{Emitter, Script, Scripts};

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
