//! Formatting utilities used for CLI and export outputs.

/// Minutes as `02h 25m`, or `02:25` when `short`. Negative values keep a `-`.
pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.unsigned_abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;
    let sign = if mins < 0 { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Share of `part` in `whole`, one decimal ("37.5%"). Zero whole → "0.0%".
pub fn percent(part: i64, whole: i64) -> String {
    if whole == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / whole as f64)
}
