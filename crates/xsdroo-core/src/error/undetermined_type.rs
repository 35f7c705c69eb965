use super::Error;

/// Error when the type of an element declaration cannot be determined.
///
/// Raised when an element has no `type` attribute and no restriction or
/// extension `base` can be found beneath it.
#[derive(Debug)]
pub(super) struct UndeterminedType {
    element: Box<str>,
}

impl std::error::Error for UndeterminedType {}

impl core::fmt::Display for UndeterminedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot determine the type of element `{}`",
            self.element
        )
    }
}

impl Error {
    /// Creates an undetermined type error for the named element.
    pub fn undetermined_type(element: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UndeterminedType(UndeterminedType {
            element: element.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is
    /// an undetermined type error.
    pub fn is_undetermined_type(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UndeterminedType(_)))
    }
}
