//! SQLite-backed store for flavors, ingredients and customer suggestions
//!
//! # Design
//!
//! - One database file, three independent tables, no foreign keys
//! - `Database` is only a connection factory; it holds no open handle
//! - Every operation opens its own connection on the blocking pool and drops
//!   it on every exit path
//! - Constraint enforcement (UNIQUE, CHECK) is left to SQLite; violations
//!   surface as `StoreError::Constraint`

mod errors;
pub mod flavors;
pub mod ingredients;
mod schema;
mod seed;
pub mod suggestions;

pub use errors::{StoreError, StoreResult};
pub use schema::migrate;
pub use seed::{seed, SeedReport};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;

/// How long a connection waits on a locked database before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection factory for the store file
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection to the store file
    pub fn open(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Create the file if needed, ensure tables exist and seed empty tables.
    ///
    /// Runs in a single transaction, so a failed seed leaves no partial rows.
    /// Safe to call on every start.
    pub fn bootstrap(&self) -> StoreResult<SeedReport> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        migrate(&tx)?;
        let report = seed(&tx)?;
        tx.commit()?;

        Ok(report)
    }

    /// Run `op` against a request-scoped connection on the blocking pool
    pub async fn run<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        tokio::task::spawn_blocking(move || {
            let conn = db.open()?;
            op(&conn)
        })
        .await?
    }
}
