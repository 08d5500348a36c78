pub mod db;
pub use db::connect;

mod introspect;
pub use introspect::{ColumnDetails, IndexDetails, Introspector};

mod reconcile;
pub use reconcile::{Reconciler, Report};

pub use converge_core::{
    schema, Column, ColumnBuilder, ColumnType, Connection, DefaultValue, Entity, Error,
    ForeignKey, ForeignKeyAction, Result, Table,
};
