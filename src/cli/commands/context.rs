use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::recent_entries_context;
use crate::db::shared;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Context { rows } = cmd {
        let store = shared::open(&cfg.store_uri)?;
        let n = rows.unwrap_or(cfg.default_context_rows);
        println!("{}", recent_entries_context(&store, n));
    }
    Ok(())
}
