pub mod serializer;
pub use serializer::{quote_identifier, Serializer};

pub mod stmt;
pub use stmt::Statement;
