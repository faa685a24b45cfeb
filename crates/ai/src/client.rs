//! HTTP client for an OpenAI-compatible chat completions endpoint.

use std::time::Duration;

use pagecraft_core::brand::BrandKit;
use pagecraft_core::kind::SectionKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AiError;
use crate::prompt;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const EDIT_TEMPERATURE: f32 = 0.3;
const GENERATE_TEMPERATURE: f32 = 0.7;

/// Client configuration, normally loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API credential. `None` means the capability is not configured and
    /// every call fails with [`AiError::NotConfigured`].
    pub api_key: Option<String>,
    /// Base URL of the chat completions API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Hard deadline on the external call; expiry maps to
    /// [`AiError::Request`].
    pub timeout: Duration,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default                     |
    /// |---------------------------|-----------------------------|
    /// | `OPENAI_API_KEY`          | unset (capability disabled) |
    /// | `OPENAI_BASE_URL`         | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`            | `gpt-4o-mini`               |
    /// | `AI_REQUEST_TIMEOUT_SECS` | `60`                        |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let timeout_secs: u64 = std::env::var("AI_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("AI_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// A configuration with no credential. Used by tests and by
    /// deployments that run without the AI capability.
    pub fn unconfigured() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// The AI Edit Adapter's client half.
pub struct AiClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl AiClient {
    /// Build a client from configuration. The request timeout is baked
    /// into the underlying HTTP client.
    pub fn new(config: AiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { http, config }
    }

    /// Whether a usable credential is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Request a candidate replacement config for a section.
    ///
    /// The adapter asks the model to modify only fields implicated by
    /// `instruction` and to preserve the rest; the returned value
    /// replaces the stored config wholesale once the caller persists it.
    pub async fn edit_section(
        &self,
        kind: &SectionKind,
        current_config: &Value,
        instruction: &str,
    ) -> Result<Value, AiError> {
        let system = prompt::edit_system_prompt(kind);
        let user = prompt::edit_user_prompt(current_config, instruction);
        self.chat(&system, &user, EDIT_TEMPERATURE).await
    }

    /// Generate a standalone config for a section kind from a project's
    /// brand kit. Same contract and failure taxonomy as
    /// [`edit_section`](Self::edit_section), with no current config to
    /// preserve.
    pub async fn generate_section(
        &self,
        kind: &SectionKind,
        brand_kit: &BrandKit,
        context: Option<&str>,
    ) -> Result<Value, AiError> {
        let system = prompt::generate_system_prompt(kind, brand_kit, context);
        let user = prompt::generate_user_prompt(kind);
        self.chat(&system, &user, GENERATE_TEMPERATURE).await
    }

    /// One chat completion round-trip, parsed into a JSON object.
    async fn chat(&self, system: &str, user: &str, temperature: f32) -> Result<Value, AiError> {
        let api_key = self.config.api_key.as_ref().ok_or(AiError::NotConfigured)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "AI request transport failure");
                AiError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, "AI provider returned an error");
            return Err(AiError::Request(format!("provider returned {status}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::Request(format!("malformed provider response: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(AiError::EmptyResponse)?;

        serde_json::from_str(&content).map_err(|e| AiError::InvalidJson(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn unconfigured_client_reports_so() {
        let client = AiClient::new(AiConfig::unconfigured());
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn edit_without_credential_fails_not_configured() {
        let client = AiClient::new(AiConfig::unconfigured());
        let result = client
            .edit_section(&SectionKind::Hero, &json!({}), "make it blue")
            .await;
        assert_matches!(result, Err(AiError::NotConfigured));
    }

    #[tokio::test]
    async fn generate_without_credential_fails_not_configured() {
        let client = AiClient::new(AiConfig::unconfigured());
        let result = client
            .generate_section(&SectionKind::Stats, &BrandKit::default(), None)
            .await;
        assert_matches!(result, Err(AiError::NotConfigured));
    }
}
