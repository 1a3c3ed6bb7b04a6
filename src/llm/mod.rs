//! Language-model assistant: prompt assembly and the chat-completion gateway.

mod gateway;
mod prompt;
mod types;

pub use gateway::{ChatGateway, GatewayError, MISSING_TOKEN_MESSAGE};
pub use prompt::build_prompt;
pub use types::{ChatCompletionRequest, ChatMessage};

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "tngtech/deepseek-r1t2-chimera:free";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Anything that can answer a question about the work data.
///
/// Implementations never fail: problems come back as the answer text.
pub trait Assistant {
    fn ask(&self, question: &str, context: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout: default_timeout(),
            api_token: None,
        }
    }
}
