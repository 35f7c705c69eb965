mod fixture;
pub use fixture::{fixture, fixture_path};

mod xsdroo_test;
pub use xsdroo_test::XsdrooTest;

pub use std_util::prelude::*;
