use super::Statement;

use converge_core::schema::{Column, ColumnType};

/// A statement to create a table holding only its primary key column.
///
/// Every other column is added by the per-column reconciliation pass.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table.
    pub name: String,

    /// The primary key column: unsigned auto-increment integer.
    pub primary_key: Column,
}

impl Statement {
    /// Creates a table with its conventional primary key column.
    pub fn create_table(name: &str, primary_key: &str) -> Self {
        let mut column = Column::new(primary_key, ColumnType::Int);
        column.unsigned = true;
        column.allow_null = false;

        CreateTable {
            name: name.to_owned(),
            primary_key: column,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
