/// Durable key-value storage for the session, backed by SQLite.
#[cfg(test)]
mod memory;
mod migrations;
mod values;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rusqlite::Connection;

#[cfg(test)]
pub use memory::MemoryStore;
pub use values::{delete_value, query_value, upsert_value};

/// String key-value storage the session mirrors its state into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// `KeyValueStore` over the `session` table of a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        query_value(key, &self.conn)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        upsert_value(key, value, &self.conn)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        delete_value(key, &self.conn)
    }
}

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    tracing::debug!(path = %db_path.display(), "database ready");
    Ok(conn)
}

/// Returns the directory holding the default database.
/// Falls back to the working directory when no data dir is found.
fn data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join("daytimer");
        std::fs::create_dir_all(&app_dir).ok();
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// Returns the default database path inside the user's data directory.
pub fn default_db_path() -> PathBuf {
    data_dir().join("daytimer.db")
}
