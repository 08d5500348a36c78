use super::Error;

/// Error when a column definition is internally inconsistent.
///
/// This occurs when:
/// - A non-numeric column is marked unsigned
/// - A non-temporal column is given a timestamp default or auto-update
/// - A relation refinement is applied before any relation is declared
///
/// These errors are raised while the desired shape is being declared,
/// before any statement reaches the database.
#[derive(Debug)]
pub(super) struct ValidationError {
    message: Box<str>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid column definition: {}", self.message)
    }
}

impl Error {
    /// Creates a validation error.
    ///
    /// This is used when a declared column definition is internally
    /// inconsistent, such as an unsigned flag on a text column.
    pub fn validation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
