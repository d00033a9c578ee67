//! Connection handling for the `SQLite` corpus source.

use crate::{Error, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

/// Opens an existing database read-only and configures it.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the file does not exist and
/// [`Error::OperationFailed`] if it cannot be opened.
pub fn open_read_only(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "corpus database {}",
            path.display()
        )));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| Error::OperationFailed {
        operation: "open_sqlite".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;

    configure_connection(&conn)?;
    tracing::debug!(path = %path.display(), "opened corpus database");
    Ok(conn)
}

/// Configures a read-only connection.
///
/// Sets a 5-second `busy_timeout` so a load that races a writer holding the
/// lock waits instead of failing with `SQLITE_BUSY`.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if the pragma cannot be set.
pub fn configure_connection(conn: &Connection) -> Result<()> {
    conn.busy_timeout(Duration::from_secs(5))
        .map_err(|e| Error::OperationFailed {
            operation: "configure_sqlite".to_string(),
            cause: e.to_string(),
        })
}
