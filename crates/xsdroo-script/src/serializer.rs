#[macro_use]
mod fmt;
use fmt::ToScript;

mod arg;
use arg::{Arg, Flag};

mod class;
use class::Class;

// Statement serializers
mod banner;
mod field;
mod statement;

use crate::stmt::Statement;
use xsdroo_core::Package;

/// Serializes statements to script text.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Package classes are qualified with.
    package: &'a Package,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized script
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(package: &'a Package) -> Self {
        Serializer { package }
    }

    pub fn package(&self) -> &Package {
        self.package
    }

    /// Serializes one statement, without a trailing newline. Banners span
    /// several lines.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_script(&mut fmt);
        ret
    }
}
