use super::Statement;

use converge_core::schema::Column;

/// A statement to add a column to a table.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Name of the table to add the column to.
    pub table: String,

    /// The full desired column definition.
    pub column: Column,

    /// Column to position the new column after, when known.
    pub after: Option<String>,
}

impl Statement {
    /// Adds a column to a table, optionally positioned after another.
    pub fn add_column(table: &str, column: &Column, after: Option<&str>) -> Self {
        AddColumn {
            table: table.to_owned(),
            column: column.clone(),
            after: after.map(str::to_owned),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
