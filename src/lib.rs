//! # Repartee
//!
//! A pattern-matching chat responder.
//!
//! Repartee loads stored input/response pairs from a `SQLite` table, normalizes
//! them with a fixed table of literal substitutions, and answers each line of
//! user input by substring containment against the normalized corpus. Lines
//! that match nothing get a canned apology and are learned as new pairs for
//! the rest of the session.
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use repartee::{RawPair, Responder, RustSyntaxCheck, SubstitutionTable, build_corpus};
//!
//! let table = SubstitutionTable::default();
//! let mut corpus = build_corpus(vec![RawPair::new("hola", "bienvenido")], &table);
//! let mut responder = Responder::new(table, RustSyntaxCheck, StdRng::seed_from_u64(7));
//!
//! let reply = responder.respond(&mut corpus, "Hola amigo");
//! assert_eq!(reply.text, "bienvenido");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod quality;
pub mod services;
pub mod storage;

pub use config::{LoggingSettings, ReparteeConfig, StoreConfig};
pub use models::{Corpus, CorpusEntry, RawPair, Reply, ReplyOutcome};
pub use quality::{RustSyntaxCheck, SyntaxCheck};
pub use services::{
    Responder, SubstitutionRule, SubstitutionTable, build_corpus, load_corpus, normalize,
};
pub use storage::{CorpusSource, InMemoryCorpusSource, SqliteCorpusSource};

/// Error type for repartee operations.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Bad configuration values, unsafe table or column names |
/// | `OperationFailed` | Database open/query failures, console I/O, config parsing |
/// | `NotFound` | A configured file or table does not exist |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A table or column name is not a plain SQL identifier
    /// - A configuration value cannot be interpreted
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The `SQLite` database cannot be opened or queried
    /// - Reading a line from the console or writing a reply fails
    /// - The configuration file cannot be read or parsed
    /// - Logging cannot be initialized
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// A required resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type alias for repartee operations.
pub type Result<T> = std::result::Result<T, Error>;
