use super::Statement;

/// A statement to drop a column from a table.
#[derive(Debug, Clone)]
pub struct DropColumn {
    /// Name of the table holding the column.
    pub table: String,

    /// Name of the column to drop.
    pub column: String,
}

impl Statement {
    /// Drops a column.
    pub fn drop_column(table: &str, column: &str) -> Self {
        DropColumn {
            table: table.to_owned(),
            column: column.to_owned(),
        }
        .into()
    }
}

impl From<DropColumn> for Statement {
    fn from(value: DropColumn) -> Self {
        Self::DropColumn(value)
    }
}
