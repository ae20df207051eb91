/// Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS session (
            key         TEXT    PRIMARY KEY,
            value       TEXT    NOT NULL
        );
        ",
    )?;
    Ok(())
}
