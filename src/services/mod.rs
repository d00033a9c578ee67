//! Business logic services.
//!
//! - [`normalizer`]: lowercasing plus ordered literal substitutions
//! - [`corpus_builder`]: turns raw store rows into the normalized corpus
//! - [`responder`]: answers one line of input against the corpus

pub mod corpus_builder;
pub mod normalizer;
pub mod responder;

pub use corpus_builder::{build_corpus, load_corpus};
pub use normalizer::{SubstitutionRule, SubstitutionTable, normalize};
pub use responder::Responder;
