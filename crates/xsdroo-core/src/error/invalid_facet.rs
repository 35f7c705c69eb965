use super::Error;

/// Error when a facet value cannot be converted to the numeric kind the
/// field's target type requires.
#[derive(Debug)]
pub(super) struct InvalidFacet {
    element: Box<str>,
    facet: Box<str>,
    value: Box<str>,
}

impl std::error::Error for InvalidFacet {}

impl core::fmt::Display for InvalidFacet {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid schema: facet `{}` of element `{}` has non-numeric value `{}`",
            self.facet, self.element, self.value
        )
    }
}

impl Error {
    /// Creates an invalid facet error.
    pub fn invalid_facet(
        element: impl Into<String>,
        facet: impl Into<String>,
        value: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidFacet(InvalidFacet {
            element: element.into().into(),
            facet: facet.into().into(),
            value: value.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is
    /// an invalid facet error.
    pub fn is_invalid_facet(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidFacet(_)))
    }
}
