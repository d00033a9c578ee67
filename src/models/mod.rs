//! Data models for repartee.
//!
//! This module contains the corpus and reply types shared by the storage,
//! responder, and session layers.

mod corpus;
mod reply;

pub use corpus::{Corpus, CorpusEntry, RawPair};
pub use reply::{FALLBACK_RESPONSE, Reply, ReplyOutcome, SUFFIX_ILL_FORMED, SUFFIX_WELL_FORMED};
