//! Corpus CLI command.

use crate::services::{SubstitutionTable, load_corpus};
use crate::storage::CorpusSource;
use crate::{Error, Result};
use std::io::Write;

/// Loads the corpus and prints it after normalization.
pub struct CorpusCommand {
    table: SubstitutionTable,
}

impl CorpusCommand {
    /// Creates the command with the built-in substitution table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: SubstitutionTable::default(),
        }
    }

    /// Writes one `input => response` line per entry, then the entry count.
    ///
    /// # Errors
    ///
    /// Returns the load error, or [`Error::OperationFailed`] if writing fails.
    pub fn run<S, W>(&self, source: &S, mut output: W) -> Result<usize>
    where
        S: CorpusSource + ?Sized,
        W: Write,
    {
        let corpus = load_corpus(source, &self.table)?;

        let write_err = |e: std::io::Error| Error::OperationFailed {
            operation: "write_corpus".to_string(),
            cause: e.to_string(),
        };
        for entry in corpus.entries() {
            writeln!(output, "{entry}").map_err(write_err)?;
        }
        writeln!(output, "{} entries", corpus.len()).map_err(write_err)?;

        Ok(corpus.len())
    }
}

impl Default for CorpusCommand {
    fn default() -> Self {
        Self::new()
    }
}
