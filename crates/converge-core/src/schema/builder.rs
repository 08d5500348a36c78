use super::{Column, DefaultValue, Entity, ForeignKey, ForeignKeyAction, CURRENT_TIMESTAMP};
use crate::{Error, Result};

/// Fluent builder over one column slot in a [`Table`](super::Table).
///
/// Mutators that can reject the definition return `Result`, so `populate`
/// implementations chain them with `?`:
///
/// ```
/// # use converge_core::{ColumnType, Table, Result};
/// # fn populate(table: &mut Table) -> Result<()> {
/// table.column("age", ColumnType::Int).unsigned()?.required();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ColumnBuilder<'a> {
    column: &'a mut Column,
}

impl<'a> ColumnBuilder<'a> {
    pub(crate) fn new(column: &'a mut Column) -> ColumnBuilder<'a> {
        ColumnBuilder { column }
    }

    /// Sets the declared length.
    pub fn size(self, length: u32) -> Self {
        self.column.length = Some(length);
        self
    }

    /// Sets the decimal precision.
    pub fn precision(self, precision: u32) -> Self {
        self.column.precision = Some(precision);
        self
    }

    /// Marks the column unsigned. Numeric types only.
    pub fn unsigned(self) -> Result<Self> {
        if !self.column.ty.is_numeric() {
            return Err(Error::validation(format!(
                "cannot mark column `{}` of type {} as unsigned",
                self.column.name, self.column.ty
            )));
        }
        self.column.unsigned = true;
        Ok(self)
    }

    /// Forbids NULL.
    pub fn required(self) -> Self {
        self.column.allow_null = false;
        self
    }

    /// Sets the declared default. Stored verbatim, no coercion.
    pub fn default_value(self, value: impl Into<DefaultValue>) -> Self {
        self.column.default = Some(value.into());
        self
    }

    /// Requests a plain index on this column.
    pub fn index(self) -> Self {
        self.column.indexed = true;
        self
    }

    /// Requests a unique index on this column. Wins over [`index`](Self::index).
    pub fn unique_index(self) -> Self {
        self.column.unique = true;
        self
    }

    /// Makes the column reset to the current timestamp on row updates.
    /// Temporal types only.
    pub fn on_update_timestamp(self) -> Result<Self> {
        if !self.column.ty.is_temporal() {
            return Err(Error::validation(format!(
                "cannot auto-update column `{}` of type {}: not a temporal type",
                self.column.name, self.column.ty
            )));
        }
        self.column.auto_update_timestamp = true;
        Ok(self)
    }

    /// Defaults the column to the insertion timestamp. Temporal types only.
    pub fn current_timestamp(self) -> Result<Self> {
        if !self.column.ty.is_temporal() {
            return Err(Error::validation(format!(
                "cannot default column `{}` of type {} to the current timestamp",
                self.column.name, self.column.ty
            )));
        }
        self.column.default = Some(DefaultValue::Str(CURRENT_TIMESTAMP.to_owned()));
        Ok(self)
    }

    /// Declares a relation to `T`'s table, referencing its primary key.
    ///
    /// Actions default to `SET NULL` on delete and `CASCADE` on update.
    /// The column is marked unsigned to match the key it references, so
    /// the column type must be numeric.
    pub fn foreign<T: Entity>(self) -> Result<Self> {
        self.column.foreign_key = Some(ForeignKey {
            table: T::table_name().to_owned(),
            column: T::primary_key_name(),
            on_delete: ForeignKeyAction::SetNull,
            on_update: ForeignKeyAction::Cascade,
        });
        self.unsigned()
    }

    /// Points the relation at a different column on the target table.
    pub fn references(mut self, column: impl Into<String>) -> Result<Self> {
        self.relation_mut()?.column = column.into();
        Ok(self)
    }

    /// Sets the delete action for the declared relation.
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Result<Self> {
        self.relation_mut()?.on_delete = action;
        Ok(self)
    }

    /// Sets the update action for the declared relation.
    pub fn on_update(mut self, action: ForeignKeyAction) -> Result<Self> {
        self.relation_mut()?.on_update = action;
        Ok(self)
    }

    fn relation_mut(&mut self) -> Result<&mut ForeignKey> {
        match self.column.foreign_key {
            Some(ref mut fk) => Ok(fk),
            None => Err(Error::validation(format!(
                "column `{}` has no relation to refine; declare one with foreign() first",
                self.column.name
            ))),
        }
    }
}
