use super::Error;

/// Error reading the schema or writing a script.
#[derive(Debug)]
pub(super) struct IoError {
    source: std::io::Error,
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "I/O error: {}", self.source)
    }
}

impl Error {
    /// Creates an I/O error.
    pub fn io(source: std::io::Error) -> Error {
        Error::from(super::ErrorKind::Io(IoError { source }))
    }

    /// Returns `true` if this error, or any error in its context chain, is
    /// an I/O error.
    pub fn is_io(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::Io(_)))
    }
}
