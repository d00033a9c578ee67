//! SQL helpers for the corpus query.
//!
//! Table and column names come from configuration and cannot be bound as
//! parameters, so they are checked against a conservative identifier grammar
//! before being placed in the query.

use crate::{Error, Result};

/// Checks that `name` is a plain SQL identifier: an ASCII letter or `_`
/// followed by ASCII letters, digits, or `_`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] naming the rejected identifier.
///
/// # Examples
///
/// ```
/// use repartee::storage::sqlite::validate_identifier;
///
/// assert!(validate_identifier("chat_data").is_ok());
/// assert!(validate_identifier("chat-data").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<&str> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(name)
    } else {
        Err(Error::InvalidInput(format!(
            "'{name}' is not a valid SQL identifier"
        )))
    }
}

/// Builds the full-table scan returning `(input, response)` columns.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any name fails [`validate_identifier`].
///
/// # Examples
///
/// ```
/// use repartee::storage::sqlite::build_select_query;
///
/// let query = build_select_query("chat_data", "input_text", "response_text")?;
/// assert_eq!(query, "SELECT input_text, response_text FROM chat_data");
/// # Ok::<(), repartee::Error>(())
/// ```
pub fn build_select_query(table: &str, input_column: &str, response_column: &str) -> Result<String> {
    let table = validate_identifier(table)?;
    let input_column = validate_identifier(input_column)?;
    let response_column = validate_identifier(response_column)?;
    Ok(format!("SELECT {input_column}, {response_column} FROM {table}"))
}
