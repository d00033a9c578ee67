//! In-memory corpus source for testing.

use crate::Result;
use crate::models::RawPair;
use crate::storage::CorpusSource;

/// Corpus source backed by a fixed list of rows.
///
/// # Example
///
/// ```rust
/// use repartee::{CorpusSource, InMemoryCorpusSource};
///
/// let source = InMemoryCorpusSource::from_pairs([("hola", "bienvenido")]);
/// assert_eq!(source.load_pairs()?.len(), 1);
/// # Ok::<(), repartee::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpusSource {
    pairs: Vec<RawPair>,
}

impl InMemoryCorpusSource {
    /// Creates a source over the given rows.
    #[must_use]
    pub const fn new(pairs: Vec<RawPair>) -> Self {
        Self { pairs }
    }

    /// Creates a source from `(input, response)` string tuples.
    #[must_use]
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(input, response)| RawPair::new(input, response))
                .collect(),
        }
    }
}

impl CorpusSource for InMemoryCorpusSource {
    fn load_pairs(&self) -> Result<Vec<RawPair>> {
        Ok(self.pairs.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.pairs.len())
    }
}
