//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::DomainResult;

/// Shared handle to the open connection
pub type DbConnection = Arc<Mutex<Connection>>;

/// Open (or create) the database at `db_path`; `:memory:` gives a private
/// in-memory database
pub fn init_db(db_path: &Path) -> DomainResult<DbConnection> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // seq keeps insertion order independent of client-assigned ids
    conn.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id INTEGER NOT NULL UNIQUE,
            content TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
