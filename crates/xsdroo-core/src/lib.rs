mod error;
pub use error::{Error, IntoError};

mod builder;

pub mod model;
pub use model::Model;

mod package;
pub use package::Package;

pub mod resolve;
pub use resolve::Resolution;

pub mod schema;
pub use schema::Schema;

pub mod ty;

/// A Result type alias that uses xsdroo's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
