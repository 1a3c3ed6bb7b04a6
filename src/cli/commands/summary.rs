use crate::cli::commands::common::{View, load_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::Summary;
use crate::db::shared;
use crate::errors::AppResult;
use crate::ui::charts::render_bar_chart;
use crate::ui::messages::{header, info};
use crate::utils::mins2readable;

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filter } = cmd {
        let store = shared::open(&cfg.store_uri)?;

        header("📊 Summary");

        let table = match load_view(&store) {
            View::NoData => {
                info("No data to display. Add your first entry with `rworklogger add`.");
                return Ok(());
            }
            View::Table(t) => t,
        };

        let view = filter.to_filter()?.apply(&table);
        if view.is_empty() {
            info("No data after filtering.");
            return Ok(());
        }

        let summary = Summary::build(&view);

        for (key, totals) in summary.charts() {
            if let Some(totals) = totals
                && !totals.is_empty()
            {
                println!("{}", render_bar_chart(key.title(), totals, BAR_WIDTH));
            }
        }

        println!(
            "Total: {} ({} min) over {} entries",
            mins2readable(summary.total_minutes, false),
            summary.total_minutes,
            view.len()
        );
    }
    Ok(())
}
