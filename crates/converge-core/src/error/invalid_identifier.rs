use crate::Error;

/// Error when an identifier cannot be safely quoted into DDL.
///
/// Identifiers cannot be bound as statement parameters, so every name that
/// reaches generated SQL is gated to `[A-Za-z0-9_]` first.
#[derive(Debug)]
pub(super) struct InvalidIdentifierError {
    name: Box<str>,
}

impl std::error::Error for InvalidIdentifierError {}

impl core::fmt::Display for InvalidIdentifierError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid identifier: `{}` contains characters outside [A-Za-z0-9_]",
            self.name
        )
    }
}

impl Error {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidIdentifier(InvalidIdentifierError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentifier(_))
    }
}
