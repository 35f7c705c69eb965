//! Mapping from XML Schema built-in types to target field types.

mod primitive;
pub use primitive::{Numeric, Primitive};

mod target;
pub use target::{TargetType, TypeKind};

/// Maps a built-in type name, with any prefix already stripped, to its
/// target type.
///
/// Unknown names map to `string` and log a warning.
pub fn map(name: &str) -> TargetType {
    match Primitive::from_name(name) {
        Some(primitive) => primitive.target_type(),
        None => {
            warn_unknown(name);
            TargetType::string()
        }
    }
}

pub(crate) fn warn_unknown(name: &str) {
    log::warn!("could not find xsd type `{name}`; using string");
}
