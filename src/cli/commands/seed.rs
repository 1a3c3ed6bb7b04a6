use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::{SeedLogic, generate_entries};
use crate::db::shared;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use crate::utils::date;
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { count, yes } = cmd {
        println!("🚀 Test Data Generator");
        println!("This will add {} sample entries to your store.", count);

        if !*yes && !confirm()? {
            error("Data generation cancelled.");
            return Ok(());
        }

        let store = shared::open(&cfg.store_uri)?;

        let entries = generate_entries(&mut rand::thread_rng(), *count, date::today());
        let written = SeedLogic::apply(&store, &entries)?;

        success(format!("Successfully generated {} test entries!", written));

        match store.count() {
            Ok(total) => info(format!("📊 Total entries in database: {}", total)),
            Err(e) => error(format!("Error counting documents: {}", e)),
        }
    }
    Ok(())
}

fn confirm() -> AppResult<bool> {
    print!("Continue? (y/N): ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_lowercase();

    Ok(ans == "y" || ans == "yes")
}
