use super::{ColumnType, DefaultValue, ForeignKey};

/// The desired shape of one column.
///
/// Instances are created through [`Table::column`](super::Table::column)
/// and refined through the returned
/// [`ColumnBuilder`](super::ColumnBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The column type.
    pub ty: ColumnType,

    /// Declared length, or the type default when `None`.
    pub length: Option<u32>,

    /// Declared decimal precision, or the type default when `None`.
    pub precision: Option<u32>,

    /// Whether the column is unsigned. Numeric types only.
    pub unsigned: bool,

    /// Whether the column accepts NULL.
    pub allow_null: bool,

    /// Declared default, if any.
    pub default: Option<DefaultValue>,

    /// Whether the column should carry a plain index.
    pub indexed: bool,

    /// Whether the column should carry a unique index. Wins over `indexed`.
    pub unique: bool,

    /// Whether the column resets itself to the current timestamp on row
    /// updates. Temporal types only.
    pub auto_update_timestamp: bool,

    /// The relation this column declares, if any.
    pub foreign_key: Option<ForeignKey>,
}

impl Column {
    /// Creates a column with the type's defaults: nullable, signed, no
    /// default, no indexes.
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Column {
        Column {
            name: name.into(),
            ty,
            length: None,
            precision: None,
            unsigned: false,
            allow_null: true,
            default: None,
            indexed: false,
            unique: false,
            auto_update_timestamp: false,
            foreign_key: None,
        }
    }

    /// Renders the native type string the way the database reports it, so
    /// a column created from this definition compares equal on the next
    /// run.
    ///
    /// Display widths follow the MariaDB defaults: `int(11)` signed,
    /// `int(10)` unsigned, `tinyint(1)`, `bigint(20)`, `decimal(10,0)`.
    pub fn sql_type(&self) -> String {
        let base = match self.ty {
            ColumnType::String => format!("varchar({})", self.length.unwrap_or(255)),
            ColumnType::Int => {
                let width = self.length.unwrap_or(if self.unsigned { 10 } else { 11 });
                format!("int({})", width)
            }
            ColumnType::TinyInt => format!("tinyint({})", self.length.unwrap_or(1)),
            ColumnType::BigInt => format!("bigint({})", self.length.unwrap_or(20)),
            ColumnType::Text => "text".to_owned(),
            ColumnType::Date => "date".to_owned(),
            ColumnType::DateTime => "datetime".to_owned(),
            ColumnType::Decimal => format!(
                "decimal({},{})",
                self.length.unwrap_or(10),
                self.precision.unwrap_or(0)
            ),
        };

        if self.unsigned {
            format!("{} unsigned", base)
        } else {
            base
        }
    }

    /// Whether any index is requested for this column.
    pub fn wants_index(&self) -> bool {
        self.indexed || self.unique
    }

    /// Effective index uniqueness. `unique` wins when both flags are set.
    pub fn wants_unique_index(&self) -> bool {
        self.unique
    }
}
