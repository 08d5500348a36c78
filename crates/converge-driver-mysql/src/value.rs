use converge_core::driver::Value as CoreValue;
use converge_core::{err, Error, Result};

use mysql_async::prelude::ToValue;

#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this driver value back into the engine value.
    pub(crate) fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a value read from a MySQL result set.
    ///
    /// Metadata queries only yield text, integers, and NULL; anything
    /// else is an error rather than a silent coercion.
    pub(crate) fn from_sql(value: mysql_async::Value) -> Result<Value> {
        let value = match value {
            mysql_async::Value::NULL => CoreValue::Null,
            mysql_async::Value::Bytes(bytes) => {
                CoreValue::Str(String::from_utf8(bytes).map_err(Error::driver)?)
            }
            mysql_async::Value::Int(value) => CoreValue::Int(value),
            mysql_async::Value::UInt(value) => CoreValue::UInt(value),
            value => return Err(err!("unsupported metadata value `{:?}`", value)),
        };
        Ok(Value(value))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::Str(value) => value.to_value(),
            CoreValue::Int(value) => value.to_value(),
            CoreValue::UInt(value) => value.to_value(),
        }
    }
}
