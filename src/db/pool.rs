//! Record store client: one verified connection scoped to one collection.

use crate::db::initialize::init_db;
use crate::db::queries::{count_documents, insert_document, load_documents};
use crate::db::{COLLECTION_NAME, DATABASE_NAME};
use crate::errors::{AppError, AppResult};
use crate::models::RawRecord;
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

/// Where a connection URI points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

impl StoreLocation {
    /// Accepts `sqlite://<path>`, `file:<path>`, `:memory:` or a bare path.
    pub fn parse(uri: &str) -> AppResult<Self> {
        let uri = uri.trim();

        if uri.is_empty() {
            return Err(AppError::Connection("store URI not configured".into()));
        }
        if uri == ":memory:" || uri == "sqlite://:memory:" {
            return Ok(StoreLocation::Memory);
        }
        if let Some((scheme, _)) = uri.split_once("://")
            && scheme != "sqlite"
        {
            return Err(AppError::Connection(format!(
                "unsupported store scheme '{scheme}'"
            )));
        }

        let path = uri
            .strip_prefix("sqlite://")
            .or_else(|| uri.strip_prefix("file:"))
            .unwrap_or(uri);

        Ok(StoreLocation::File(expand_tilde(path)))
    }
}

pub struct RecordStore {
    pub conn: Connection,
    db_name: String,
    collection: String,
}

impl RecordStore {
    /// Open the store, run a liveness check and bootstrap the schema.
    /// Fails fast: no retry, the cause is carried in the error.
    pub fn connect(uri: &str) -> AppResult<Self> {
        let location = StoreLocation::parse(uri)?;

        let conn = match &location {
            StoreLocation::Memory => Connection::open_in_memory(),
            StoreLocation::File(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
        }
        .map_err(|e| AppError::Connection(format!("{e} ({uri})")))?;

        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| AppError::Connection(format!("ping failed: {e}")))?;

        init_db(&conn).map_err(|e| AppError::Connection(format!("schema setup failed: {e}")))?;

        Ok(Self {
            conn,
            db_name: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
        })
    }

    /// Point the handle at another logical collection (used by tests).
    pub fn with_collection(mut self, db_name: &str, collection: &str) -> Self {
        self.db_name = db_name.to_string();
        self.collection = collection.to_string();
        self
    }

    pub fn collection(&self) -> (&str, &str) {
        (&self.db_name, &self.collection)
    }

    /// Write one entry.
    pub fn insert(&self, entry: &WorkEntry) -> AppResult<()> {
        self.insert_raw(&entry.to_document())
    }

    /// Write one arbitrary document (legacy-schema fixtures, imports).
    pub fn insert_raw(&self, doc: &RawRecord) -> AppResult<()> {
        insert_document(&self.conn, &self.db_name, &self.collection, doc)
            .map(|_| ())
            .map_err(|e| AppError::Write(e.to_string()))
    }

    /// Every document of the collection. An empty collection is `Ok(vec![])`.
    pub fn find_all(&self) -> AppResult<Vec<RawRecord>> {
        load_documents(&self.conn, &self.db_name, &self.collection)
            .map_err(|e| AppError::Fetch(e.to_string()))
    }

    /// Dashboard view of [`find_all`](Self::find_all): a failed fetch is
    /// reported as a warning and shows up as an empty data set.
    pub fn load_records(&self) -> Vec<RawRecord> {
        match self.find_all() {
            Ok(records) => records,
            Err(e) => {
                warning(e);
                Vec::new()
            }
        }
    }

    pub fn count(&self) -> AppResult<u64> {
        count_documents(&self.conn, &self.db_name, &self.collection)
            .map_err(|e| AppError::Fetch(e.to_string()))
    }
}
