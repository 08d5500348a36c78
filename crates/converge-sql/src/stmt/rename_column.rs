use super::Statement;

/// A statement to rename a column without touching its definition.
///
/// Definition drift on the renamed column is the per-column pass's job.
#[derive(Debug, Clone)]
pub struct RenameColumn {
    /// Name of the table holding the column.
    pub table: String,

    /// Current name of the column.
    pub from: String,

    /// New name of the column.
    pub to: String,
}

impl Statement {
    /// Renames a column.
    pub fn rename_column(table: &str, from: &str, to: &str) -> Self {
        RenameColumn {
            table: table.to_owned(),
            from: from.to_owned(),
            to: to.to_owned(),
        }
        .into()
    }
}

impl From<RenameColumn> for Statement {
    fn from(value: RenameColumn) -> Self {
        Self::RenameColumn(value)
    }
}
