//! Context block fed to the language model: the most recent entries as a
//! fixed-width table.

use crate::core::normalize::{WorkRow, WorkTable, normalize};
use crate::db::pool::RecordStore;
use crate::models::field::Field;
use crate::utils::table::{Align, Column, Table};
use chrono::{NaiveDateTime, NaiveTime};

pub const DEFAULT_CONTEXT_ROWS: usize = 10;
pub const EMPTY_CONTEXT: &str = "No work entries available.";
pub const CONTEXT_HEADER: &str = "Recent work entries:";

const MISSING: &str = "NaN";
const MISSING_DATE: &str = "NaT";

/// Serialize the `n` newest rows of `table`.
///
/// Rows are ordered by date (newest first) when the table has a date
/// column, otherwise retrieval order is kept.
pub fn format_context(table: &WorkTable, n: usize) -> String {
    if table.is_empty() {
        return EMPTY_CONTEXT.to_string();
    }

    let mut recent = table.clone();
    if recent.has_date() {
        recent.sort_by_date_desc();
    }
    recent.rows.truncate(n);

    let fields: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| recent.has_column(*f))
        .collect();

    if fields.is_empty() {
        return format!("{CONTEXT_HEADER}\n");
    }

    let date_only = recent
        .rows
        .iter()
        .filter_map(|r| r.date)
        .all(|d| d.time() == NaiveTime::MIN);

    let mut out = Table::new(
        fields
            .iter()
            .map(|f| Column::new(f.canonical(), Align::Right))
            .collect(),
    );

    for row in &recent.rows {
        out.add_row(
            fields
                .iter()
                .map(|f| cell(row, *f, date_only))
                .collect(),
        );
    }

    format!("{CONTEXT_HEADER}\n{}", out.render())
}

fn cell(row: &WorkRow, field: Field, date_only: bool) -> String {
    match field {
        Field::Date => row
            .date
            .map(|d| format_date(d, date_only))
            .unwrap_or_else(|| MISSING_DATE.to_string()),
        other => row.text(other).unwrap_or_else(|| MISSING.to_string()),
    }
}

fn format_date(d: NaiveDateTime, date_only: bool) -> String {
    if date_only {
        d.format("%Y-%m-%d").to_string()
    } else {
        d.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Load, normalize and format in one go. A failed fetch has already been
/// reported by the store and shows up as the empty-context text.
pub fn recent_entries_context(store: &RecordStore, n: usize) -> String {
    let records = store.load_records();
    format_context(&normalize(&records), n)
}
