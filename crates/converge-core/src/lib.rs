pub mod driver;
pub use driver::Connection;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{
    Column, ColumnBuilder, ColumnType, DefaultValue, Entity, ForeignKey, ForeignKeyAction, Table,
};

/// A Result type alias that uses converge's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
