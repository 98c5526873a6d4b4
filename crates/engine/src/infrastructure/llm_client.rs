//! OpenAI-compatible LLM client
//!
//! DeepSeek, DashScope (compatible mode), OpenAI and Zhipu all accept the
//! same `/chat/completions` request, so one client serves every provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use reelgate_domain::{LlmConfig, ReasoningEffort};
use reelgate_shared::{ChatCompletionResponse, ChatMessage};

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest};

/// Client for any OpenAI-compatible chat completion API
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    config: LlmConfig,
}

impl OpenAiCompatibleClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn build_request<'a>(&'a self, request: &'a LlmRequest) -> OpenAIChatRequest<'a> {
        let reasoning_effort = request
            .reasoning_effort
            .or(self.config.reasoning_effort)
            .filter(|_| self.config.supports_reasoning_effort());

        OpenAIChatRequest {
            model: &self.config.model,
            messages: &request.messages,
            temperature: request.temperature.unwrap_or(self.config.temperature),
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
            stream: false,
            reasoning_effort,
        }
    }
}

#[async_trait]
impl LlmPort for OpenAiCompatibleClient {
    async fn chat(&self, request: LlmRequest) -> Result<ChatCompletionResponse, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::MissingApiKey(self.config.missing_key_message()))?;

        let api_request = self.build_request(&request);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url_trimmed()))
            .bearer_auth(api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::RequestFailed(format!(
                        "request timed out after {}ms",
                        self.config.timeout_ms
                    ))
                } else {
                    LlmError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::Api {
                provider: self.config.provider.display_name(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }

    fn config(&self) -> LlmConfig {
        self.config.clone()
    }
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<ReasoningEffort>,
}
