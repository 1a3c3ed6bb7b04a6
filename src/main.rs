//! rWorklogger main entrypoint.

use rworklogger::run;
use rworklogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
