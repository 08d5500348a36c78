use super::{Column, ColumnBuilder, ColumnType};

use indexmap::map::Entry;
use indexmap::IndexMap;

/// The desired shape of one table.
///
/// Column insertion order is the desired physical order in the database:
/// the reconciliation pass positions each column immediately after the one
/// declared before it.
#[derive(Debug)]
pub struct Table {
    /// The table name in the database.
    pub name: String,

    /// Desired columns, keyed by name, in declaration order.
    pub columns: IndexMap<String, Column>,

    /// Columns to drop if present, in declaration order.
    pub dropped: Vec<String>,

    /// Renames to apply before columns are reconciled, as `(old, new)`.
    pub renamed: Vec<(String, String)>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            columns: IndexMap::new(),
            dropped: vec![],
            renamed: vec![],
        }
    }

    /// Declares a column, returning a builder over its slot.
    ///
    /// Redeclaring an existing name replaces the definition in place; the
    /// column keeps its original position.
    pub fn column(&mut self, name: impl Into<String>, ty: ColumnType) -> ColumnBuilder<'_> {
        let name = name.into();
        let column = Column::new(name.clone(), ty);
        let slot = match self.columns.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(column);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(column),
        };
        ColumnBuilder::new(slot)
    }

    /// Marks a column to be dropped if it exists in the database.
    ///
    /// A drop wins over a pending rename from the same name.
    pub fn drop_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.columns.shift_remove(&name);
        self.renamed.retain(|(old, _)| *old != name);
        if !self.dropped.contains(&name) {
            self.dropped.push(name);
        }
    }

    /// Records a rename to apply before columns are reconciled.
    ///
    /// Only the name changes here; declare the new name with
    /// [`column`](Table::column) to reconcile its definition in the same
    /// run.
    pub fn rename_column(&mut self, old: impl Into<String>, new: impl Into<String>) {
        let old = old.into();
        self.columns.shift_remove(&old);
        self.renamed.push((old, new.into()));
    }
}
