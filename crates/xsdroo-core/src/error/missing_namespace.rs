use super::Error;

/// Error when the schema does not declare a namespace the generator needs,
/// either the `targetNamespace` or a binding for the XML Schema namespace.
#[derive(Debug)]
pub(super) struct MissingNamespace {
    what: Box<str>,
}

impl std::error::Error for MissingNamespace {}

impl core::fmt::Display for MissingNamespace {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid schema: document declares no resolvable {}",
            self.what
        )
    }
}

impl Error {
    /// Creates a missing namespace error.
    pub fn missing_namespace(what: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingNamespace(MissingNamespace {
            what: what.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is
    /// a missing namespace error.
    pub fn is_missing_namespace(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::MissingNamespace(_)))
    }
}
