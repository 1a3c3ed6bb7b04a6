//! Sample data for trying the tool out.

use crate::db::log::ttlog_or_warn;
use crate::db::pool::RecordStore;
use crate::errors::AppResult;
use crate::models::productivity::Productivity;
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::{error, success};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_SEED_COUNT: usize = 50;

const PERSONS: [&str; 6] = ["John", "Anna", "Tom", "Eva", "Mike", "Sarah"];
const TASKS: [&str; 10] = [
    "Login module development",
    "Client meeting",
    "Sales data analysis",
    "Reporting feature implementation",
    "Mobile app testing",
    "Database optimization",
    "Code review",
    "API documentation",
    "Bug fixing",
    "System integration",
];
const TASK_TYPES: [&str; 5] = ["Analysis", "Coding", "Meeting", "Email", "Other"];
const MINUTES: [i64; 12] = [15, 30, 45, 60, 90, 120, 180, 240, 300, 360, 420, 480];

/// Random entries dated within the 30 days before `today`.
pub fn generate_entries<R: Rng>(rng: &mut R, count: usize, today: NaiveDate) -> Vec<WorkEntry> {
    let start = today - Duration::days(30);
    let mut out = Vec::with_capacity(count);

    for _ in 0..count {
        let date = start + Duration::days(rng.gen_range(0..30));
        let productivity = Productivity::all()
            .choose(rng)
            .copied()
            .unwrap_or(Productivity::Productive);

        let entry = WorkEntry::new(
            PERSONS.choose(rng).copied().unwrap_or("John"),
            TASKS.choose(rng).copied().unwrap_or("Code review"),
            TASK_TYPES.choose(rng).copied().unwrap_or("Other"),
            MINUTES.choose(rng).copied().unwrap_or(30),
            productivity,
            date,
        );

        // the pools above only hold valid values
        if let Ok(e) = entry {
            out.push(e);
        }
    }

    out
}

pub struct SeedLogic;

impl SeedLogic {
    /// Insert `entries` one by one; a failed insert is reported and skipped.
    /// Returns how many were written.
    pub fn apply(store: &RecordStore, entries: &[WorkEntry]) -> AppResult<usize> {
        let mut written = 0;

        for entry in entries {
            match store.insert(entry) {
                Ok(()) => {
                    success(format!(
                        "Added entry: {} - {} ({} min)",
                        entry.person, entry.task, entry.time
                    ));
                    written += 1;
                }
                Err(e) => error(format!("Error adding entry: {}", e)),
            }
        }

        ttlog_or_warn(
            &store.conn,
            "seed",
            "",
            &format!("Generated {} sample entries", written),
        );

        Ok(written)
    }
}
