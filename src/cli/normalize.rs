//! Normalize CLI command.

use crate::services::SubstitutionTable;
use crate::{Error, Result};
use std::io::Write;

/// Prints the normalized form of a text.
pub struct NormalizeCommand {
    table: SubstitutionTable,
}

impl NormalizeCommand {
    /// Creates the command with the built-in substitution table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: SubstitutionTable::default(),
        }
    }

    /// Writes the normalized `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] if writing fails.
    pub fn run<W: Write>(&self, text: &str, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.table.normalize(text)).map_err(|e| Error::OperationFailed {
            operation: "write_normalized".to_string(),
            cause: e.to_string(),
        })
    }
}

impl Default for NormalizeCommand {
    fn default() -> Self {
        Self::new()
    }
}
