pub mod option;
pub mod result;
pub mod script;

pub mod prelude {
    pub use crate::{
        assert_err, assert_line, assert_no_line, assert_none, assert_ok, assert_some,
        script::ScriptUtil,
    };
}
