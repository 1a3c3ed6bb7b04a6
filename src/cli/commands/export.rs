use crate::cli::commands::common::{View, load_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::shared;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let store = shared::open(&cfg.store_uri)?;

        let table = match load_view(&store) {
            View::NoData => {
                info("No data to export.");
                return Ok(());
            }
            View::Table(t) => t,
        };

        let view = filter.to_filter()?.apply(&table);
        let written = ExportLogic::export(&view, *format, file, *force)?;

        if written > 0 {
            ttlog_or_warn(
                &store.conn,
                "export",
                format.as_str(),
                &format!("{written} entries → {file}"),
            );
        }
    }
    Ok(())
}
