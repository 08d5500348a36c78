use super::Error;

/// Error when the live schema is in a state the engine refuses to touch.
///
/// The canonical case is more than one constraint matching a single
/// conventional name in the table DDL. That indicates pre-existing
/// corruption, and resolving it automatically could drop the wrong
/// constraint, so the engine stops instead.
#[derive(Debug)]
pub(super) struct IntegrityDefectError {
    message: Box<str>,
}

impl std::error::Error for IntegrityDefectError {}

impl core::fmt::Display for IntegrityDefectError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema integrity defect: {}", self.message)
    }
}

impl Error {
    /// Creates an integrity defect error.
    pub fn integrity_defect(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::IntegrityDefect(IntegrityDefectError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an integrity defect error.
    pub fn is_integrity_defect(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IntegrityDefect(_))
    }
}
