//! Schema normalizer.
//!
//! Documents may use the canonical field names or the alternate (Polish)
//! names of an earlier schema version. The choice is made once per record
//! set: a field is read from its canonical key whenever *any* document has
//! that key, and from the alternate key only when no document does. Rows
//! that only carry the alternate spelling of a canonical column therefore
//! come out empty for that field; see [`WorkTable::mixed_fields`].

use crate::models::RawRecord;
use crate::models::field::Field;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Format of the derived `date_str` column.
pub const DATE_STR_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    Canonical,
    Alternate,
    Missing,
}

/// Per-field key choice for one record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResolution {
    sources: [ColumnSource; 6],
    mixed: Vec<Field>,
}

impl ColumnResolution {
    pub fn resolve(records: &[RawRecord]) -> Self {
        let has_key = |key: &str| records.iter().any(|r| r.contains_key(key));

        let mut sources = [ColumnSource::Missing; 6];
        let mut mixed = Vec::new();

        for (i, field) in Field::ALL.iter().enumerate() {
            let canonical = has_key(field.canonical());
            let alternate = has_key(field.alternate());

            sources[i] = match (canonical, alternate) {
                (true, _) => ColumnSource::Canonical,
                (false, true) => ColumnSource::Alternate,
                (false, false) => ColumnSource::Missing,
            };

            if canonical && alternate {
                mixed.push(*field);
            }
        }

        Self { sources, mixed }
    }

    pub fn source(&self, field: Field) -> ColumnSource {
        self.sources[index_of(field)]
    }

    /// Document key the field is read from, if any.
    pub fn key(&self, field: Field) -> Option<&'static str> {
        match self.source(field) {
            ColumnSource::Canonical => Some(field.canonical()),
            ColumnSource::Alternate => Some(field.alternate()),
            ColumnSource::Missing => None,
        }
    }

    pub fn is_present(&self, field: Field) -> bool {
        self.source(field) != ColumnSource::Missing
    }
}

fn index_of(field: Field) -> usize {
    Field::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

/// One normalized entry. Every field is optional: documents are loosely
/// typed and may predate the current schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkRow {
    pub person: Option<String>,
    pub task: Option<String>,
    pub task_type: Option<String>,
    pub time: Option<i64>,
    pub productivity: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub date_str: Option<String>,
}

impl WorkRow {
    /// Text value of a non-date field.
    pub fn text(&self, field: Field) -> Option<String> {
        match field {
            Field::Person => self.person.clone(),
            Field::Task => self.task.clone(),
            Field::TaskType => self.task_type.clone(),
            Field::Time => self.time.map(|t| t.to_string()),
            Field::Productivity => self.productivity.clone(),
            Field::Date => self.date_str.clone(),
        }
    }

    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|d| d.date())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkTable {
    pub resolution: ColumnResolution,
    pub rows: Vec<WorkRow>,
}

impl WorkTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, field: Field) -> bool {
        self.resolution.is_present(field)
    }

    /// A date column exists (and with it `date_str`).
    pub fn has_date(&self) -> bool {
        self.has_column(Field::Date)
    }

    /// Canonical labels of the present columns, plus `date_str`.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut cols: Vec<&'static str> = Field::ALL
            .iter()
            .filter(|f| self.has_column(**f))
            .map(|f| f.canonical())
            .collect();
        if self.has_date() {
            cols.push("date_str");
        }
        cols
    }

    /// Fields for which both spellings occur in the record set.
    pub fn mixed_fields(&self) -> &[Field] {
        &self.resolution.mixed
    }

    /// Sum of all known times, saturating at the `i64` bounds.
    pub fn total_minutes(&self) -> i64 {
        self.rows
            .iter()
            .filter_map(|r| r.time)
            .fold(0, i64::saturating_add)
    }

    /// Stable sort, newest first, rows without a date last.
    pub fn sort_by_date_desc(&mut self) {
        self.rows.sort_by(|a, b| match (a.date, b.date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    /// Same columns, a subset of rows.
    pub fn with_rows(&self, rows: Vec<WorkRow>) -> Self {
        Self {
            resolution: self.resolution.clone(),
            rows,
        }
    }
}

/// Reconcile the two schemas into one canonical table, keeping row order.
pub fn normalize(records: &[RawRecord]) -> WorkTable {
    let resolution = ColumnResolution::resolve(records);

    let rows = records
        .iter()
        .map(|record| {
            let get = |field: Field| resolution.key(field).and_then(|k| record.get(k));

            let date = get(Field::Date).and_then(parse_date_value);

            WorkRow {
                person: get(Field::Person).and_then(text_value),
                task: get(Field::Task).and_then(text_value),
                task_type: get(Field::TaskType).and_then(text_value),
                time: get(Field::Time).and_then(minutes_value),
                productivity: get(Field::Productivity).and_then(text_value),
                date,
                date_str: date.map(|d| d.format(DATE_STR_FORMAT).to_string()),
            }
        })
        .collect();

    WorkTable { resolution, rows }
}

fn text_value(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn minutes_value(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Object(map) => map
            .get("$numberInt")
            .or_else(|| map.get("$numberLong"))
            .and_then(minutes_value),
        _ => None,
    }
}

/// Permissive date coercion. Unknown shapes yield `None` instead of an error.
pub fn parse_date_value(v: &Value) -> Option<NaiveDateTime> {
    match v {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => n.as_i64().and_then(from_epoch_millis),
        Value::Object(map) => {
            if let Some(inner) = map.get("$date") {
                return parse_date_value(inner);
            }
            // extended-JSON epoch milliseconds, the only string read as an epoch
            match map.get("$numberLong")? {
                Value::String(ms) => ms.trim().parse::<i64>().ok().and_then(from_epoch_millis),
                other => other.as_i64().and_then(from_epoch_millis),
            }
        }
        _ => None,
    }
}

pub fn parse_date_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    parse_compact_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// Digit-only dates: `YYYYMMDD`, or a bare `YYYY` read as January 1st.
fn parse_compact_date(s: &str) -> Option<NaiveDate> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.len() {
        4 => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        8 => NaiveDate::from_ymd_opt(
            s.get(0..4)?.parse().ok()?,
            s.get(4..6)?.parse().ok()?,
            s.get(6..8)?.parse().ok()?,
        ),
        _ => None,
    }
}

fn from_epoch_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}
