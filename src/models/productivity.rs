use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Productivity {
    Productive,
    Unproductive,
}

impl Productivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Productivity::Productive => "productive",
            Productivity::Unproductive => "unproductive",
        }
    }

    pub fn all() -> [Productivity; 2] {
        [Productivity::Productive, Productivity::Unproductive]
    }
}
