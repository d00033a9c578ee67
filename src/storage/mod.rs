//! Corpus storage.
//!
//! The corpus is read once at startup from a [`CorpusSource`]:
//! - [`SqliteCorpusSource`]: full-table scan of a `SQLite` table
//! - [`InMemoryCorpusSource`]: fixed rows, for tests and demos
//!
//! Learned pairs are never written back.

// Allow significant_drop_tightening - the connection lives for the whole load.
#![allow(clippy::significant_drop_tightening)]

mod memory;
pub mod sqlite;
mod traits;

pub use memory::InMemoryCorpusSource;
pub use sqlite::SqliteCorpusSource;
pub use traits::CorpusSource;
