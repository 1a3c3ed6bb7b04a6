//! Helpers shared by the views that load and filter the whole collection.

use crate::cli::parser::FilterArgs;
use crate::core::filter::Filter;
use crate::core::normalize::{WorkTable, normalize};
use crate::db::pool::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::range::parse_period;

impl FilterArgs {
    pub fn to_filter(&self) -> AppResult<Filter> {
        Ok(Filter {
            persons: self.persons.clone(),
            productivity: self.productivity.clone(),
            range: parse_period(self.range.as_deref())?,
        })
    }
}

/// Loaded, normalized table before filtering.
pub enum View {
    /// The collection holds no documents (or could not be read).
    NoData,
    Table(WorkTable),
}

/// Fetch everything and normalize. Mixed-schema fields are flagged.
pub fn load_view(store: &RecordStore) -> View {
    let records = store.load_records();
    if records.is_empty() {
        return View::NoData;
    }

    let table = normalize(&records);
    warn_mixed_schema(&table);
    View::Table(table)
}

pub fn warn_mixed_schema(table: &WorkTable) {
    for field in table.mixed_fields() {
        warning(format!(
            "Both '{}' and '{}' fields found: values stored under '{}' are not shown.",
            field.canonical(),
            field.alternate(),
            field.alternate()
        ));
    }
}
