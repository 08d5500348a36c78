use super::ForeignKeyAction;

/// A declared relation from one column to a target table's key column.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    /// The referenced table.
    pub table: String,

    /// The referenced column, the target's primary key by default.
    pub column: String,

    /// Action applied when the referenced row is deleted.
    pub on_delete: ForeignKeyAction,

    /// Action applied when the referenced key is updated.
    pub on_update: ForeignKeyAction,
}

impl ForeignKey {
    /// The conventional constraint name for the relation declared on
    /// `table`.`column`.
    pub fn constraint_name(table: &str, column: &str) -> String {
        format!("fk_{}_{}", table, column)
    }
}
