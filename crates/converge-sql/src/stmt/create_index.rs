use super::Statement;

/// A statement to create a single-column index named after its column.
#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the table to index.
    pub table: String,

    /// The column to index. Doubles as the index name.
    pub column: String,

    /// When true, the index is unique.
    pub unique: bool,
}

impl Statement {
    /// Creates a plain index on one column.
    pub fn create_index(table: &str, column: &str) -> Self {
        CreateIndex {
            table: table.to_owned(),
            column: column.to_owned(),
            unique: false,
        }
        .into()
    }

    /// Creates a unique index on one column.
    pub fn create_unique_index(table: &str, column: &str) -> Self {
        CreateIndex {
            table: table.to_owned(),
            column: column.to_owned(),
            unique: true,
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
