//! Corpus source trait.

use crate::Result;
use crate::models::RawPair;

/// A store that yields the raw `(input_text, response_text)` rows.
///
/// Implementations return rows in store order and perform no normalization.
pub trait CorpusSource {
    /// Loads every row.
    fn load_pairs(&self) -> Result<Vec<RawPair>>;

    /// Returns a short description of the source for logging.
    fn describe(&self) -> String;
}
