//! rWorklogger library root.
//! Exposes the CLI parser, the high-level run() function and the store,
//! normalizer, context and assistant modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod llm;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Context { .. } => cli::commands::context::handle(&cli.command, cfg),
        Commands::Ask { .. } => cli::commands::ask::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Seed { .. } => cli::commands::seed::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ secrets from a local .env, if any
    dotenvy::dotenv().ok();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ load config once (file + environment)
    let mut cfg = Config::load()?;

    // 4️⃣ command-line store override wins over everything
    if let Some(custom) = &cli.store {
        cfg.store_uri = custom.clone();
    }

    dispatch(&cli, &cfg)
}
