//! Process-wide store handle.
//!
//! The connection is opened once, on first use, and reused by every
//! operation of the process. A failed open is returned to the caller and
//! nothing is cached, so there is no half-initialized handle and no
//! implicit reconnect.

use crate::db::pool::RecordStore;
use crate::errors::{AppError, AppResult};
use std::sync::{Mutex, MutexGuard, OnceLock};

static STORE: OnceLock<Mutex<RecordStore>> = OnceLock::new();

/// Connect on first call; later calls return the cached handle and ignore `uri`.
pub fn init(uri: &str) -> AppResult<&'static Mutex<RecordStore>> {
    if let Some(store) = STORE.get() {
        return Ok(store);
    }
    let store = RecordStore::connect(uri)?;
    Ok(STORE.get_or_init(|| Mutex::new(store)))
}

/// Initialize (if needed) and lock the shared handle.
pub fn open(uri: &str) -> AppResult<MutexGuard<'static, RecordStore>> {
    init(uri)?
        .lock()
        .map_err(|_| AppError::Other("store handle poisoned".into()))
}

pub fn is_initialized() -> bool {
    STORE.get().is_some()
}
