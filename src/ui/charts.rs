//! Horizontal bar charts for the summary view.

use crate::core::aggregate::GroupTotal;
use crate::utils::formatting::{mins2readable, percent};
use unicode_width::UnicodeWidthStr;

const BAR: char = '█';

/// Render one chart. Bars scale to the largest group; every line shows
/// the total and its share of the chart.
pub fn render_bar_chart(title: &str, totals: &[GroupTotal], bar_width: usize) -> String {
    let mut out = format!("{title}\n");

    let max = totals.iter().map(|t| t.minutes).max().unwrap_or(0);
    let sum = totals
        .iter()
        .map(|t| t.minutes)
        .fold(0, i64::saturating_add);
    let label_w = totals.iter().map(|t| t.key.width()).max().unwrap_or(0);

    for t in totals {
        let len = if max > 0 {
            ((t.minutes.max(0) as f64 / max as f64) * bar_width as f64).round() as usize
        } else {
            0
        };
        let pad = " ".repeat(label_w.saturating_sub(t.key.width()));

        out.push_str(&format!(
            "  {}{} | {:<bar_width$} {:>4} min ({}, {})\n",
            t.key,
            pad,
            BAR.to_string().repeat(len),
            t.minutes,
            mins2readable(t.minutes, true),
            percent(t.minutes, sum),
            bar_width = bar_width,
        ));
    }

    out
}
