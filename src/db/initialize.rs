use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the document table exists.
/// Every logical database/collection pair shares it; `body` holds the raw
/// JSON object exactly as it was written.
fn ensure_documents_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            db_name     TEXT NOT NULL,
            collection  TEXT NOT NULL,
            body        TEXT NOT NULL CHECK(json_valid(body)),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_documents_scope ON documents(db_name, collection);
        "#,
    )?;
    Ok(())
}

/// Initialize the store schema. Idempotent, safe to run on every connect.
pub fn init_db(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_documents_table(conn)?;
    Ok(())
}
