//! Time totals behind the summary charts.

use crate::core::normalize::{WorkRow, WorkTable};
use crate::models::field::Field;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Productivity,
    Day,
    TaskType,
}

impl GroupKey {
    pub fn title(&self) -> &'static str {
        match self {
            GroupKey::Productivity => "Productivity (time)",
            GroupKey::Day => "Work time by day",
            GroupKey::TaskType => "Time by task type",
        }
    }

    fn column(&self) -> Field {
        match self {
            GroupKey::Productivity => Field::Productivity,
            GroupKey::Day => Field::Date,
            GroupKey::TaskType => Field::TaskType,
        }
    }

    fn value(&self, row: &WorkRow) -> Option<String> {
        match self {
            GroupKey::Productivity => row.productivity.clone(),
            GroupKey::Day => row.date_str.clone(),
            GroupKey::TaskType => row.task_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    pub key: String,
    pub minutes: i64,
}

/// Sum of `time` per group, groups sorted by key. Rows without a group
/// value are dropped, missing times count as zero, sums saturate at the
/// `i64` bounds. `None` when the table lacks the group column or the time
/// column.
pub fn sum_time_by(table: &WorkTable, key: GroupKey) -> Option<Vec<GroupTotal>> {
    if !table.has_column(key.column()) || !table.has_column(Field::Time) {
        return None;
    }

    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for row in &table.rows {
        if let Some(k) = key.value(row) {
            let sum = totals.entry(k).or_insert(0);
            *sum = sum.saturating_add(row.time.unwrap_or(0));
        }
    }

    Some(
        totals
            .into_iter()
            .map(|(key, minutes)| GroupTotal { key, minutes })
            .collect(),
    )
}

/// The three charts of the summary view.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub by_productivity: Option<Vec<GroupTotal>>,
    pub by_day: Option<Vec<GroupTotal>>,
    pub by_task_type: Option<Vec<GroupTotal>>,
    pub total_minutes: i64,
}

impl Summary {
    pub fn build(table: &WorkTable) -> Self {
        Self {
            by_productivity: sum_time_by(table, GroupKey::Productivity),
            by_day: sum_time_by(table, GroupKey::Day),
            by_task_type: sum_time_by(table, GroupKey::TaskType),
            total_minutes: table.total_minutes(),
        }
    }

    pub fn charts(&self) -> [(GroupKey, Option<&Vec<GroupTotal>>); 3] {
        [
            (GroupKey::Productivity, self.by_productivity.as_ref()),
            (GroupKey::Day, self.by_day.as_ref()),
            (GroupKey::TaskType, self.by_task_type.as_ref()),
        ]
    }
}
