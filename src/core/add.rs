use crate::db::log::ttlog_or_warn;
use crate::db::pool::RecordStore;
use crate::errors::AppResult;
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate and persist one entry. On failure nothing is written and the
    /// error carries the store's reason.
    pub fn apply(store: &RecordStore, entry: &WorkEntry) -> AppResult<()> {
        entry.validate()?;
        store.insert(entry)?;

        success("Entry saved!");

        ttlog_or_warn(
            &store.conn,
            "add",
            &entry.person,
            &format!(
                "{} | {} | {} min | {} | {}",
                entry.task,
                entry.task_type,
                entry.time,
                entry.productivity.as_str(),
                entry.date.format("%Y-%m-%d")
            ),
        );

        Ok(())
    }
}
