//! Database Connection and Setup
//!
//! Manages the local SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};

use crate::domain::{DomainError, DomainResult};

/// Shared handle to the (possibly not yet opened) connection
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
    ready: Arc<watch::Sender<bool>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            ready: Arc::new(watch::channel(false).0),
        }
    }

    pub async fn is_initialized(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    /// Hand over an opened connection and wake everyone in `wait_ready`
    pub async fn install(&self, conn: Connection) {
        *self.conn.lock().await = Some(conn);
        self.ready.send_replace(true);
    }

    /// Wait up to `timeout` for `install`. Returns whether the database is open.
    pub async fn wait_ready(&self, timeout: Duration) -> bool {
        let mut ready = self.ready.subscribe();
        matches!(
            tokio::time::timeout(timeout, ready.wait_for(|open| *open)).await,
            Ok(Ok(_))
        )
    }
}

/// Open the database at `db_path` (`:memory:` for tests) and run migrations
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(db_path)?
    };

    run_migrations(&conn)?;

    let state = DbState::new();
    state.install(conn).await;
    Ok(state)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| DomainError::Storage(format!("Failed to create kv_store: {}", e)))?;

    Ok(())
}
