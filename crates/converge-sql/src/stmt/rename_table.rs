use super::Statement;

/// A statement to rename a table.
#[derive(Debug, Clone)]
pub struct RenameTable {
    /// Current name of the table.
    pub from: String,

    /// New name of the table.
    pub to: String,
}

impl Statement {
    /// Renames a table.
    pub fn rename_table(from: &str, to: &str) -> Self {
        RenameTable {
            from: from.to_owned(),
            to: to.to_owned(),
        }
        .into()
    }
}

impl From<RenameTable> for Statement {
    fn from(value: RenameTable) -> Self {
        Self::RenameTable(value)
    }
}
