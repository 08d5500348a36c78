use super::Statement;

use converge_core::schema::{ForeignKey, ForeignKeyAction};

/// A statement to add a named foreign key constraint.
#[derive(Debug, Clone)]
pub struct AddForeignKey {
    /// Name of the table carrying the constraint.
    pub table: String,

    /// The constrained column.
    pub column: String,

    /// Constraint name, `fk_<table>_<column>` by convention.
    pub name: String,

    /// The referenced table.
    pub target_table: String,

    /// The referenced column.
    pub target_column: String,

    /// Action applied when the referenced row is deleted.
    pub on_delete: ForeignKeyAction,

    /// Action applied when the referenced key is updated.
    pub on_update: ForeignKeyAction,
}

impl Statement {
    /// Adds a foreign key constraint under its conventional name.
    pub fn add_foreign_key(table: &str, column: &str, fk: &ForeignKey) -> Self {
        AddForeignKey {
            table: table.to_owned(),
            column: column.to_owned(),
            name: ForeignKey::constraint_name(table, column),
            target_table: fk.table.clone(),
            target_column: fk.column.clone(),
            on_delete: fk.on_delete,
            on_update: fk.on_update,
        }
        .into()
    }
}

impl From<AddForeignKey> for Statement {
    fn from(value: AddForeignKey) -> Self {
        Self::AddForeignKey(value)
    }
}
