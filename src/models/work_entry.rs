use super::RawRecord;
use super::field::Field;
use super::productivity::Productivity;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Longest single entry the form accepts (one working day).
pub const MAX_MINUTES: i64 = 480;

/// Format used when a date is written to a document.
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct WorkEntry {
    pub person: String,
    pub task: String,
    pub task_type: String,
    pub time: i64,
    pub productivity: Productivity,
    pub date: NaiveDateTime,
}

impl WorkEntry {
    /// Build an entry from form values. Text fields are trimmed; the date
    /// is stored at midnight.
    pub fn new(
        person: &str,
        task: &str,
        task_type: &str,
        time: i64,
        productivity: Productivity,
        date: NaiveDate,
    ) -> AppResult<Self> {
        let entry = Self {
            person: person.trim().to_string(),
            task: task.trim().to_string(),
            task_type: task_type.trim().to_string(),
            time,
            productivity,
            date: date.and_time(NaiveTime::MIN),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.task.trim().is_empty() {
            return Err(AppError::InvalidEntry("Please provide task name!".into()));
        }
        if self.person.trim().is_empty() {
            return Err(AppError::InvalidEntry("Please provide person name!".into()));
        }
        if self.task_type.trim().is_empty() {
            return Err(AppError::InvalidEntry("Please provide task type!".into()));
        }
        if !(1..=MAX_MINUTES).contains(&self.time) {
            return Err(AppError::InvalidEntry(format!(
                "Time must be between 1 and {MAX_MINUTES} minutes (got {})",
                self.time
            )));
        }
        Ok(())
    }

    /// Canonical-schema document for this entry.
    pub fn to_document(&self) -> RawRecord {
        let mut doc = RawRecord::new();
        doc.insert(Field::Person.canonical().into(), Value::from(self.person.clone()));
        doc.insert(Field::Task.canonical().into(), Value::from(self.task.clone()));
        doc.insert(
            Field::TaskType.canonical().into(),
            Value::from(self.task_type.clone()),
        );
        doc.insert(Field::Time.canonical().into(), Value::from(self.time));
        doc.insert(
            Field::Productivity.canonical().into(),
            Value::from(self.productivity.as_str()),
        );
        doc.insert(
            Field::Date.canonical().into(),
            Value::from(self.date.format(STORED_DATE_FORMAT).to_string()),
        );
        doc
    }
}
