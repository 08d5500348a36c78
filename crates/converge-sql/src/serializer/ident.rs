use converge_core::{Error, Result};

/// Validates and backtick-quotes an identifier for use in DDL.
///
/// DDL cannot bind identifiers as statement parameters, so every name that
/// reaches generated SQL goes through this gate first. Only non-empty
/// `[A-Za-z0-9_]` names are accepted.
pub fn quote_identifier(name: &str) -> Result<String> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(Error::invalid_identifier(name));
    }
    Ok(format!("`{}`", name))
}
