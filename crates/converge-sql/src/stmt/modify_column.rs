use super::Statement;

use converge_core::schema::Column;

/// A statement to redefine an existing column in place.
///
/// The full desired definition is always emitted, regardless of which
/// attribute drifted.
#[derive(Debug, Clone)]
pub struct ModifyColumn {
    /// Name of the table holding the column.
    pub table: String,

    /// The full desired column definition.
    pub column: Column,

    /// Column this one must sit immediately after, when known.
    pub after: Option<String>,
}

impl Statement {
    /// Redefines a column, optionally repositioning it.
    pub fn modify_column(table: &str, column: &Column, after: Option<&str>) -> Self {
        ModifyColumn {
            table: table.to_owned(),
            column: column.clone(),
            after: after.map(str::to_owned),
        }
        .into()
    }
}

impl From<ModifyColumn> for Statement {
    fn from(value: ModifyColumn) -> Self {
        Self::ModifyColumn(value)
    }
}
