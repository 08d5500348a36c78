use std::fmt;

/// Column types understood by the reconciliation engine.
///
/// Each variant maps to one native MySQL/MariaDB column type. The full
/// rendered SQL form lives on [`Column`](super::Column), since length,
/// precision, and signedness all participate in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// `varchar`, bounded text
    String,
    /// `int`, 4-byte integer
    Int,
    /// `tinyint`, conventionally used for booleans
    TinyInt,
    /// `bigint`, 8-byte integer
    BigInt,
    /// `text`, unbounded text without a declared length
    Text,
    /// `date`, civil date without a time of day
    Date,
    /// `datetime`, civil date and time
    DateTime,
    /// `decimal`, fixed-point number
    Decimal,
}

impl ColumnType {
    /// Returns `true` for types that admit the unsigned modifier.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ColumnType::Int | ColumnType::TinyInt | ColumnType::BigInt | ColumnType::Decimal
        )
    }

    /// Returns `true` for types that admit timestamp defaults and
    /// on-update tracking.
    pub fn is_temporal(self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::DateTime)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::String => "varchar",
            ColumnType::Int => "int",
            ColumnType::TinyInt => "tinyint",
            ColumnType::BigInt => "bigint",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Decimal => "decimal",
        })
    }
}
