use crate::errors::{AppError, AppResult};
use crate::models::RawRecord;
use chrono::Local;
use rusqlite::{Connection, params};
use serde_json::Value;

/// Insert one JSON document into `db_name/collection`. Returns the row id.
pub fn insert_document(
    conn: &Connection,
    db_name: &str,
    collection: &str,
    doc: &RawRecord,
) -> AppResult<i64> {
    let body = serde_json::to_string(doc)?;
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO documents (db_name, collection, body, created_at)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![db_name, collection, body, now])?;

    Ok(conn.last_insert_rowid())
}

/// Load every document of `db_name/collection` in insertion order.
/// The row id never leaves this function.
pub fn load_documents(
    conn: &Connection,
    db_name: &str,
    collection: &str,
) -> AppResult<Vec<RawRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, body FROM documents
         WHERE db_name = ?1 AND collection = ?2
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![db_name, collection], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (id, body) = r?;
        match serde_json::from_str::<Value>(&body)? {
            Value::Object(map) => out.push(map),
            other => {
                return Err(AppError::Fetch(format!(
                    "document {id} is not an object: {other}"
                )));
            }
        }
    }
    Ok(out)
}

pub fn count_documents(conn: &Connection, db_name: &str, collection: &str) -> AppResult<u64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM documents WHERE db_name = ?1 AND collection = ?2",
        params![db_name, collection],
        |row| row.get(0),
    )?;
    Ok(n.max(0) as u64)
}
