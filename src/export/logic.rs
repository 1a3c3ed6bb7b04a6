// src/export/logic.rs

use crate::core::normalize::WorkTable;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of the (already filtered) table.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` to `file`. Returns the number of exported rows;
    /// an empty table writes nothing.
    pub fn export(
        table: &WorkTable,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if table.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let entries: Vec<EntryExport> = table.rows.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&entries, &path)?,
            ExportFormat::Json => export_json(&entries, &path)?,
        }

        Ok(entries.len())
    }
}
