use crate::errors::{AppError, AppResult};
use crate::llm::LlmConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable overriding `store_uri`.
pub const STORE_URI_ENV: &str = "RWORKLOGGER_STORE_URI";
/// Environment variable holding the chat-completion API token.
pub const LLM_TOKEN_ENV: &str = "RWORKLOGGER_LLM_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store_uri")]
    pub store_uri: String,
    #[serde(default = "default_context_rows")]
    pub default_context_rows: usize,
    #[serde(default = "default_persons")]
    pub persons: Vec<String>,
    #[serde(default = "default_task_types")]
    pub task_types: Vec<String>,
    #[serde(default)]
    pub llm: LlmConfig,
}

fn default_store_uri() -> String {
    Config::store_file().to_string_lossy().to_string()
}

fn default_context_rows() -> usize {
    10
}

fn default_persons() -> Vec<String> {
    ["John", "Anna", "Tom", "Eva"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_task_types() -> Vec<String> {
    ["Analysis", "Coding", "Meeting", "Email", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_uri: default_store_uri(),
            default_context_rows: default_context_rows(),
            persons: default_persons(),
            task_types: default_task_types(),
            llm: LlmConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rworklogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklogger.conf")
    }

    /// Default local document store (one file per logical database)
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("work-time-tracker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Secrets from the environment always win over the file.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
            Self::from_yaml(&content)?
        } else {
            Config::default()
        };

        cfg.apply_env();
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Overlay secrets supplied through the environment.
    pub fn apply_env(&mut self) {
        if let Ok(uri) = env::var(STORE_URI_ENV)
            && !uri.trim().is_empty()
        {
            self.store_uri = uri;
        }

        if let Ok(token) = env::var(LLM_TOKEN_ENV)
            && !token.trim().is_empty()
        {
            self.llm.api_token = Some(token);
        }
    }

    /// Create the config directory and write the default configuration
    /// file (unless in test mode). Returns the store URI written.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(uri) = custom_store {
            config.store_uri = uri;
        }

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.store_uri)
    }
}
