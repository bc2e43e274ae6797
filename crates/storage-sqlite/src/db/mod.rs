//! SQLite connection management and schema setup.

pub mod write_actor;

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use log::info;
use rusqlite::Connection;

use crate::errors::{IntoCore, StorageError};
use tradejournal_core::errors::{DatabaseError, Result};

pub use write_actor::{spawn_writer, WriteHandle};

/// Connection shared by readers and the writer actor.
pub type DbConnection = Arc<Mutex<Connection>>;

const DEFAULT_DB_FILE: &str = "tradejournal.db";

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Resolves the database file: a directory gets the default file name.
pub fn get_db_path(input: &str) -> String {
    let path = Path::new(input);
    if path.extension().is_some() {
        input.to_string()
    } else {
        path.join(DEFAULT_DB_FILE).to_string_lossy().to_string()
    }
}

/// Ensures the parent directory exists and returns the resolved path.
pub fn init(input: &str) -> Result<String> {
    let db_path = get_db_path(input);
    if let Some(parent) = Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::ConnectionFailed(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(db_path)
}

/// Opens the database file and applies the schema.
pub fn open(db_path: &str) -> Result<DbConnection> {
    let conn = Connection::open(db_path).into_core()?;
    let journal_mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .into_core()?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .into_core()?;
    run_migrations(&conn)?;
    info!("Opened journal database at {} ({} mode)", db_path, journal_mode);
    Ok(Arc::new(Mutex::new(conn)))
}

/// In-memory database, used by tests and dry runs.
pub fn open_in_memory() -> Result<DbConnection> {
    let conn = Connection::open_in_memory().into_core()?;
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;
    Ok(())
}

pub fn get_connection(db: &DbConnection) -> Result<MutexGuard<'_, Connection>> {
    db.lock().map_err(|_| StorageError::LockPoisoned.into())
}
