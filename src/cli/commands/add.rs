use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::shared;
use crate::errors::{AppError, AppResult};
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::info;
use crate::utils::date;

/// Add one work entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        person,
        task,
        task_type,
        time,
        productivity,
        date,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Build and validate the entry before touching the store
        //
        let entry = WorkEntry::new(person, task, task_type, *time, *productivity, d)?;

        if !cfg.task_types.iter().any(|t| t == &entry.task_type) {
            info(format!(
                "'{}' is not a suggested task type ({}), saved as free text.",
                entry.task_type,
                cfg.task_types.join(", ")
            ));
        }
        if !cfg.persons.iter().any(|p| p == &entry.person) {
            info(format!("New person: {}", entry.person));
        }

        //
        // 3. Open store and save
        //
        let store = shared::open(&cfg.store_uri)?;
        AddLogic::apply(&store, &entry)?;
    }

    Ok(())
}
