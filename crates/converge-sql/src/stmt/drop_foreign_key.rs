use super::Statement;

/// A statement to drop a foreign key constraint by name.
#[derive(Debug, Clone)]
pub struct DropForeignKey {
    /// Name of the table carrying the constraint.
    pub table: String,

    /// Name of the constraint.
    pub name: String,
}

impl Statement {
    /// Drops a foreign key constraint.
    pub fn drop_foreign_key(table: &str, name: &str) -> Self {
        DropForeignKey {
            table: table.to_owned(),
            name: name.to_owned(),
        }
        .into()
    }
}

impl From<DropForeignKey> for Statement {
    fn from(value: DropForeignKey) -> Self {
        Self::DropForeignKey(value)
    }
}
