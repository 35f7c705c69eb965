use super::Error;

/// Error when the input is not well-formed XML or its root is not an XML
/// Schema `schema` element.
#[derive(Debug)]
pub(super) struct InvalidDocument {
    message: Box<str>,
}

impl std::error::Error for InvalidDocument {}

impl core::fmt::Display for InvalidDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema document: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDocument(InvalidDocument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is
    /// an invalid document error.
    pub fn is_invalid_document(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidDocument(_)))
    }
}
