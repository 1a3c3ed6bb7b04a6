//! In-memory filtering of the normalized table (person, productivity, period).

use crate::core::normalize::{WorkRow, WorkTable};
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub persons: Vec<String>,
    pub productivity: Vec<String>,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.productivity.is_empty() && self.range.is_none()
    }

    fn matches(&self, row: &WorkRow) -> bool {
        if !self.persons.is_empty() && !contains(&self.persons, row.person.as_deref()) {
            return false;
        }
        if !self.productivity.is_empty()
            && !contains(&self.productivity, row.productivity.as_deref())
        {
            return false;
        }
        if let Some((from, to)) = self.range {
            match row.day() {
                Some(d) if d >= from && d <= to => {}
                _ => return false,
            }
        }
        true
    }

    pub fn apply(&self, table: &WorkTable) -> WorkTable {
        if self.is_empty() {
            return table.clone();
        }
        let rows = table
            .rows
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        table.with_rows(rows)
    }
}

fn contains(values: &[String], value: Option<&str>) -> bool {
    value.is_some_and(|v| values.iter().any(|x| x == v))
}

/// Distinct persons in the table, sorted (the filter's option list).
pub fn person_options(table: &WorkTable) -> Vec<String> {
    distinct(table.rows.iter().filter_map(|r| r.person.clone()))
}

/// Distinct productivity values in the table, sorted.
pub fn productivity_options(table: &WorkTable) -> Vec<String> {
    distinct(table.rows.iter().filter_map(|r| r.productivity.clone()))
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
