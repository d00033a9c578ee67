//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `chat` | Interactive session against the loaded corpus (default) |
//! | `normalize` | Print the normalized form of a text |
//! | `corpus` | Print the reformulated corpus |
//!
//! # Example Usage
//!
//! ```bash
//! # Chat against chat.db
//! repartee --db chat.db
//!
//! # See how a line is normalized before matching
//! repartee normalize "Hola, ¿cómo estás?"
//!
//! # Inspect the corpus after normalization
//! repartee --db chat.db corpus
//! ```

pub mod chat;
mod corpus;
mod normalize;

pub use chat::{PROMPT, REPLY_PREFIX, SessionStats, run_session};
pub use corpus::CorpusCommand;
pub use normalize::NormalizeCommand;
