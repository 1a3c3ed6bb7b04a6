use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::recent_entries_context;
use crate::db::log::ttlog_or_warn;
use crate::db::shared;
use crate::errors::AppResult;
use crate::llm::{Assistant, ChatGateway};
use crate::ui::messages::{header, info};

const ANSWER_WIDTH: usize = 100;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask {
        question,
        rows,
        model,
    } = cmd
    {
        let n = rows.unwrap_or(cfg.default_context_rows);
        let context = {
            let store = shared::open(&cfg.store_uri)?;
            recent_entries_context(&store, n)
        };

        let mut gateway = ChatGateway::new(&cfg.llm);
        if let Some(m) = model {
            gateway = gateway.with_model(m.clone());
        }

        header("🤖 AI Assistant");
        if gateway.has_token() {
            info(format!("AI is thinking... (model: {})", gateway.model()));
        }

        let answer = gateway.ask(question, &context);

        println!("AI Answer:");
        for line in answer.lines() {
            println!("{}", textwrap::fill(line, ANSWER_WIDTH));
        }

        // the handle is not held across the request
        let store = shared::open(&cfg.store_uri)?;
        ttlog_or_warn(&store.conn, "ask", gateway.model(), question);
    }
    Ok(())
}
