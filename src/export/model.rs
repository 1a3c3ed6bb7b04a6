// src/export/model.rs

use crate::core::normalize::WorkRow;
use serde::Serialize;

/// Flat, canonical shape of one exported entry.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub person: Option<String>,
    pub task: Option<String>,
    pub task_type: Option<String>,
    pub time: Option<i64>,
    pub productivity: Option<String>,
    pub date: Option<String>,
}

impl From<&WorkRow> for EntryExport {
    fn from(row: &WorkRow) -> Self {
        Self {
            person: row.person.clone(),
            task: row.task.clone(),
            task_type: row.task_type.clone(),
            time: row.time,
            productivity: row.productivity.clone(),
            date: row.date_str.clone(),
        }
    }
}
