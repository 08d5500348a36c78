use super::Error;

/// Error when introspection expected a live column that is not there.
///
/// Raised when a positional check or detail lookup references a column
/// that existence checks just confirmed, so its absence means the
/// engine's view of the table has diverged from the database.
#[derive(Debug)]
pub(super) struct MissingColumnError {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for MissingColumnError {}

impl core::fmt::Display for MissingColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` not found on table `{}`",
            self.column, self.table
        )
    }
}

impl Error {
    /// Creates a missing column error.
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumn(MissingColumnError {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing column error.
    pub fn is_missing_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingColumn(_))
    }
}
