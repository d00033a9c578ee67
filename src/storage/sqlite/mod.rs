//! `SQLite` corpus source.
//!
//! - [`connection`]: opening and configuring the read-only connection
//! - [`sql`]: identifier validation and query construction

mod connection;
mod sql;

pub use connection::{configure_connection, open_read_only};
pub use sql::{build_select_query, validate_identifier};

use crate::config::StoreConfig;
use crate::models::RawPair;
use crate::storage::CorpusSource;
use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Instant;
use tracing::instrument;

/// Reads the corpus from a `SQLite` table with a full-table scan.
///
/// The query has no `ORDER BY`, so row order is whatever `SQLite` returns,
/// typically rowid order for a plain table.
///
/// # Example
///
/// ```rust,ignore
/// use repartee::{CorpusSource, SqliteCorpusSource, StoreConfig};
///
/// let source = SqliteCorpusSource::new(StoreConfig::new("chat.db"))?;
/// let rows = source.load_pairs()?;
/// # Ok::<(), repartee::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SqliteCorpusSource {
    db_path: PathBuf,
    query: String,
}

impl SqliteCorpusSource {
    /// Creates a source from store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the table or a column name is not a
    /// plain SQL identifier.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let query = build_select_query(
            &config.table,
            &config.input_column,
            &config.response_column,
        )?;
        Ok(Self {
            db_path: config.path,
            query,
        })
    }
}

impl CorpusSource for SqliteCorpusSource {
    #[instrument(skip(self), fields(db_path = %self.db_path.display()))]
    fn load_pairs(&self) -> Result<Vec<RawPair>> {
        let start = Instant::now();
        let result = self.run_query();

        let status = if result.is_ok() { "success" } else { "error" };
        metrics::counter!("corpus_loads_total", "status" => status).increment(1);

        match &result {
            Ok(pairs) => {
                metrics::counter!("corpus_rows_loaded_total").increment(pairs.len() as u64);
                tracing::info!(
                    rows = pairs.len(),
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "loaded corpus"
                );
            },
            Err(e) => tracing::error!(error = %e, "failed to load corpus"),
        }

        result
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.db_path.display())
    }
}

impl SqliteCorpusSource {
    fn run_query(&self) -> Result<Vec<RawPair>> {
        let conn = open_read_only(&self.db_path)?;

        let mut stmt = conn.prepare(&self.query).map_err(|e| Error::OperationFailed {
            operation: "prepare_corpus_query".to_string(),
            cause: e.to_string(),
        })?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RawPair {
                    input_text: row.get(0)?,
                    response_text: row.get(1)?,
                })
            })
            .map_err(|e| Error::OperationFailed {
                operation: "load_corpus".to_string(),
                cause: e.to_string(),
            })?;

        let pairs = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::OperationFailed {
                operation: "read_corpus_row".to_string(),
                cause: e.to_string(),
            })?;
        Ok(pairs)
    }
}
