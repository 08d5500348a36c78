use super::Table;
use crate::Result;

/// Implemented by types that declare a database table.
///
/// The reconciliation engine drives everything through this trait: the
/// table name, the primary key convention, and the desired column set.
/// Relations can only target another `Entity`, so pointing one at a type
/// outside the schema fails to compile rather than at run time.
pub trait Entity {
    /// The table name in the database.
    fn table_name() -> &'static str;

    /// The primary key column name, `<table>_id` by convention.
    fn primary_key_name() -> String {
        format!("{}_id", Self::table_name())
    }

    /// Declares the desired non-key columns on `table`.
    ///
    /// The primary key column is implicit; the engine creates and manages
    /// it.
    fn populate(table: &mut Table) -> Result<()>;
}
