/// Queries on the `session` key-value table.
use anyhow::Result;
use rusqlite::Connection;

pub fn query_value(key: &str, conn: &Connection) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM session WHERE key = ?1")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

pub fn upsert_value(key: &str, value: &str, conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT INTO session (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, value),
    )?;
    Ok(())
}

pub fn delete_value(key: &str, conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM session WHERE key = ?1", [key])?;
    Ok(())
}
