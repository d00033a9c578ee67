//! Corpus types.

use std::fmt;

/// One row as returned by the store, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    /// The stored input text.
    pub input_text: String,
    /// The stored response text.
    pub response_text: String,
}

impl RawPair {
    /// Creates a raw pair.
    #[must_use]
    pub fn new(input_text: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            response_text: response_text.into(),
        }
    }
}

/// A normalized input/response pair.
///
/// Identity is positional: two entries with the same text are distinct
/// candidates and both take part in random selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// Normalized input text, matched by substring containment.
    pub input: String,
    /// Response text returned when the input matches.
    pub response: String,
}

impl CorpusEntry {
    /// Creates an entry from already-normalized text.
    #[must_use]
    pub fn new(input: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            response: response.into(),
        }
    }

    /// Returns true if this entry's input occurs anywhere within `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.input.as_str())
    }
}

impl fmt::Display for CorpusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.input, self.response)
    }
}

/// The in-memory session corpus.
///
/// Entries keep the order in which they were loaded or learned. The corpus only
/// grows during a session and is never written back to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry at the end of the corpus.
    pub fn push(&mut self, entry: CorpusEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the corpus has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in index order.
    #[must_use]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Iterates over the input side, in index order.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.input.as_str())
    }

    /// Iterates over the response side, in index order.
    pub fn responses(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.response.as_str())
    }

    /// Collects the responses of every entry whose input is contained in
    /// `text`, scanning in index order.
    #[must_use]
    pub fn matching_responses(&self, text: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.matches(text))
            .map(|e| e.response.as_str())
            .collect()
    }
}

impl FromIterator<CorpusEntry> for Corpus {
    fn from_iter<T: IntoIterator<Item = CorpusEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<CorpusEntry> for Corpus {
    fn extend<T: IntoIterator<Item = CorpusEntry>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
