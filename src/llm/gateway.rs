use super::prompt::build_prompt;
use super::types::ChatCompletionRequest;
use super::{Assistant, LlmConfig};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Answer returned when no API token is configured. No request is made.
pub const MISSING_TOKEN_MESSAGE: &str = "Error: LLM API token not found. Set RWORKLOGGER_LLM_TOKEN \
     or add 'api_token' under 'llm' in the configuration file.";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API token not configured")]
    MissingToken,

    #[error("client setup failed: {0}")]
    Client(reqwest::Error),

    #[error("{0}")]
    Network(reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Blocking chat-completion client (OpenRouter/OpenAI compatible).
pub struct ChatGateway {
    api_url: String,
    model: String,
    timeout: Duration,
    token: Option<String>,
}

impl ChatGateway {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout),
            token: config
                .api_token
                .clone()
                .filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Send one prompt and return the first completion's text.
    pub fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let token = self
            .token
            .as_deref()
            .ok_or(GatewayError::MissingToken)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(GatewayError::Client)?;

        let payload = ChatCompletionRequest::single_user_turn(&self.model, prompt);

        let response = client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(GatewayError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response.json().map_err(|e| {
            GatewayError::InvalidResponse(format!("failed to parse response: {e}"))
        })?;

        extract_answer(&result)
    }
}

/// `choices[0].message.content`. A body without choices is handed back
/// verbatim so the user still sees what the endpoint said.
fn extract_answer(result: &Value) -> Result<String, GatewayError> {
    let has_choices = result
        .get("choices")
        .and_then(Value::as_array)
        .is_some_and(|c| !c.is_empty());

    if !has_choices {
        return Ok(result.to_string());
    }

    result
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| GatewayError::InvalidResponse("missing choices[0].message.content".into()))
}

impl Assistant for ChatGateway {
    fn ask(&self, question: &str, context: &str) -> String {
        if !self.has_token() {
            return MISSING_TOKEN_MESSAGE.to_string();
        }

        let prompt = build_prompt(context, question);
        match self.complete(&prompt) {
            Ok(answer) => answer,
            Err(e) => format!("Error querying LLM agent: {e}"),
        }
    }
}
