//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Provide the durable storage backend for desktop consumers.
//! - Apply the kv schema before the connection serves any traffic.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version` and only moves
//!   forward.
//! - A connection is handed out only after bootstrap fully succeeds.

use super::{KeyValueStore, StoreError, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: "CREATE TABLE IF NOT EXISTS kv (
              key   TEXT PRIMARY KEY,
              value TEXT NOT NULL
          );",
}];

/// Durable store over a single `kv` table.
///
/// The connection lives behind a mutex so the store can be written through
/// shared references, matching the trait contract.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a database file and applies pending migrations.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode=file");
        let outcome = Connection::open(path)
            .map_err(StoreError::from)
            .and_then(Self::bootstrap);
        Self::log_open_outcome("file", started_at, outcome)
    }

    /// Opens a throwaway in-memory database with the same schema.
    pub fn open_in_memory() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode=memory");
        let outcome = Connection::open_in_memory()
            .map_err(StoreError::from)
            .and_then(Self::bootstrap);
        Self::log_open_outcome("memory", started_at, outcome)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn log_open_outcome(
        mode: &str,
        started_at: Instant,
        outcome: StoreResult<Self>,
    ) -> StoreResult<Self> {
        match &outcome {
            Ok(_) => info!(
                "event=store_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_open module=store status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        outcome
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

fn apply_migrations(conn: &Connection) -> StoreResult<()> {
    let current: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if current >= latest_version() {
        return Ok(());
    }

    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }
        conn.execute_batch(migration.sql)?;
        conn.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SqliteStore;
    use crate::store::KeyValueStore;

    #[test]
    fn upsert_replaces_value_for_same_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("bookmark", "3/4").unwrap();
        store.set("bookmark", "3/5").unwrap();
        assert_eq!(store.get("bookmark").unwrap().as_deref(), Some("3/5"));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("nothing-here").unwrap(), None);
    }
}
