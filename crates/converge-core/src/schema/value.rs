/// The marker default that renders and compares as the engine's
/// current-timestamp function rather than as a string literal.
pub const CURRENT_TIMESTAMP: &str = "current_timestamp()";

/// A declared column default.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl DefaultValue {
    /// Returns `true` if this default is a spelling of the
    /// current-timestamp marker.
    pub fn is_current_timestamp(&self) -> bool {
        match self {
            DefaultValue::Str(s) => is_current_timestamp_spelling(s),
            _ => false,
        }
    }

    /// The value as it appears in `SHOW COLUMNS` output.
    ///
    /// Booleans take their stored tinyint form.
    pub fn as_sql_literal(&self) -> String {
        match self {
            DefaultValue::Str(s) => s.clone(),
            DefaultValue::Int(i) => i.to_string(),
            DefaultValue::Bool(true) => "1".to_owned(),
            DefaultValue::Bool(false) => "0".to_owned(),
        }
    }

    /// Whether the default reported by the database matches this declared
    /// default.
    ///
    /// The current-timestamp marker matches any engine spelling of it
    /// (case, optional parentheses, optional precision argument), so an
    /// engine-normalized spelling never reads as drift. Every other
    /// default compares verbatim.
    pub fn matches_live(&self, live: &str) -> bool {
        if self.is_current_timestamp() {
            is_current_timestamp_spelling(live)
        } else {
            self.as_sql_literal() == live
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> DefaultValue {
        DefaultValue::Str(value.to_owned())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> DefaultValue {
        DefaultValue::Str(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> DefaultValue {
        DefaultValue::Int(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> DefaultValue {
        DefaultValue::Int(i64::from(value))
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> DefaultValue {
        DefaultValue::Bool(value)
    }
}

/// Recognizes `current_timestamp` in any of the engine's spellings:
/// case-insensitive keyword, optional parentheses, optional numeric
/// fractional-seconds argument.
fn is_current_timestamp_spelling(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    let Some(rest) = lower.strip_prefix("current_timestamp") else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    rest.strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .map(|precision| precision.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
