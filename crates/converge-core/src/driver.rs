use crate::Result;

use async_trait::async_trait;

/// A single database connection used for introspection and DDL.
///
/// The engine issues every round trip through this trait, one at a time and
/// in program order. The connection is held exclusively for the duration of
/// a reconciliation run and is never closed by the engine.
#[async_trait]
pub trait Connection: Send {
    /// Executes a statement, returning the affected row count.
    async fn execute(&mut self, sql: &str, params: Vec<Value>) -> Result<u64>;

    /// Runs a query expected to yield at most one row.
    async fn fetch_one(&mut self, sql: &str, params: Vec<Value>) -> Result<Option<Row>>;

    /// Runs a query, returning every row in result order.
    async fn fetch_all(&mut self, sql: &str, params: Vec<Value>) -> Result<Vec<Row>>;
}

/// A scalar bound into a metadata query or read out of its result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Str(String),
    Int(i64),
    UInt(u64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Value {
        Value::UInt(value)
    }
}

/// One row of a metadata result set, keyed by column label.
#[derive(Debug, Clone, Default)]
pub struct Row {
    values: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Row {
        Row { values: vec![] }
    }

    /// Appends a labeled value.
    pub fn push(&mut self, label: impl Into<String>, value: Value) {
        self.values.push((label.into(), value));
    }

    /// Returns the value under `label`, if present.
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// Returns the value under `label` as text.
    ///
    /// Numeric metadata values coerce to their decimal form; NULL and
    /// missing labels are `None`.
    pub fn get_str(&self, label: &str) -> Option<String> {
        match self.get(label)? {
            Value::Null => None,
            Value::Str(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::UInt(u) => Some(u.to_string()),
        }
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Row {
        Row {
            values: iter.into_iter().collect(),
        }
    }
}
