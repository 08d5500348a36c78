mod builder;
pub use builder::ColumnBuilder;

mod column;
pub use column::Column;

mod entity;
pub use entity::Entity;

mod fk;
pub use fk::ForeignKey;

mod action;
pub use action::ForeignKeyAction;

mod table;
pub use table::Table;

mod ty;
pub use ty::ColumnType;

mod value;
pub use value::{DefaultValue, CURRENT_TIMESTAMP};
