use super::Statement;

/// A statement to drop an index.
#[derive(Debug, Clone)]
pub struct DropIndex {
    /// Name of the table carrying the index.
    pub table: String,

    /// Name of the index.
    pub index: String,
}

impl Statement {
    /// Drops an index.
    pub fn drop_index(table: &str, index: &str) -> Self {
        DropIndex {
            table: table.to_owned(),
            index: index.to_owned(),
        }
        .into()
    }
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Self::DropIndex(value)
    }
}
