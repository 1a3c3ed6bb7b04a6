use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::shared;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the store schema, after a liveness check
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;

    // `cfg` already carries --store and the environment override
    let store_uri = cfg.store_uri.clone();

    println!("⚙️  Initializing rWorklogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Store       : {}", &store_uri);

    let store = shared::open(&store_uri)?;
    let entries = store.count()?;

    println!("✅ Connected, {} entries in the collection", entries);

    ttlog_or_warn(
        &store.conn,
        "init",
        "store initialized",
        &format!("Store initialized at {}", &store_uri),
    );

    println!("🎉 rWorklogger initialization completed!");
    Ok(())
}
