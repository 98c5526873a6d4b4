//! LLM providers, their defaults, and resolved client configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Supported chat-completion providers. All speak the OpenAI-compatible
/// `/chat/completions` dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    DashScope,
    #[default]
    DeepSeek,
    OpenAi,
    Zhipu,
}

/// Per-provider defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderDefaults {
    pub base_url: &'static str,
    pub model: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_ms: u64,
}

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

impl LlmProvider {
    pub const ALL: [LlmProvider; 4] = [
        LlmProvider::DashScope,
        LlmProvider::DeepSeek,
        LlmProvider::OpenAi,
        LlmProvider::Zhipu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DashScope => "dashscope",
            Self::DeepSeek => "deepseek",
            Self::OpenAi => "openai",
            Self::Zhipu => "zhipu",
        }
    }

    /// Human-facing name used in upstream error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DashScope => "DashScope",
            Self::DeepSeek => "DeepSeek",
            Self::OpenAi => "OpenAI",
            Self::Zhipu => "Zhipu",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::DashScope => "DASHSCOPE_API_KEY",
            Self::DeepSeek => "DEEPSEEK_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Zhipu => "ZHIPU_API_KEY",
        }
    }

    pub fn defaults(&self) -> ProviderDefaults {
        let (base_url, model) = match self {
            Self::DashScope => ("https://dashscope.aliyuncs.com/api/v1", "qwen-plus"),
            Self::DeepSeek => ("https://api.deepseek.com/v1", "deepseek-chat"),
            Self::OpenAi => ("https://api.openai.com/v1", "gpt-4"),
            Self::Zhipu => ("https://open.bigmodel.cn/api/paas/v4", "glm-4"),
        };
        ProviderDefaults {
            base_url,
            model,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashscope" => Ok(Self::DashScope),
            "deepseek" => Ok(Self::DeepSeek),
            "openai" => Ok(Self::OpenAi),
            "zhipu" => Ok(Self::Zhipu),
            _ => Err(DomainError::unsupported("LLM provider", s)),
        }
    }
}

/// Reasoning effort hint, forwarded only to models that understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for ReasoningEffort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::unsupported("reasoning effort", s)),
        }
    }
}

/// Chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Resolved configuration for one provider: defaults overlaid with
/// environment and request overrides.
#[derive(Clone, PartialEq)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_ms: u64,
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl LlmConfig {
    /// Defaults for `provider` with the given key.
    pub fn for_provider(provider: LlmProvider, api_key: Option<String>) -> Self {
        let defaults = provider.defaults();
        Self {
            provider,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: defaults.base_url.to_string(),
            model: defaults.model.to_string(),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            timeout_ms: defaults.timeout_ms,
            reasoning_effort: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && !self.base_url.is_empty() && !self.model.is_empty()
    }

    /// Error message explaining why [`Self::is_configured`] is false.
    pub fn missing_key_message(&self) -> String {
        format!(
            "Missing API key for {}. Expected environment variable: {}",
            self.provider,
            self.provider.api_key_env_var()
        )
    }

    /// Whether the configured model accepts `reasoning_effort`.
    pub fn supports_reasoning_effort(&self) -> bool {
        self.model.contains("deepseek")
    }

    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_ms", &self.timeout_ms)
            .field("reasoning_effort", &self.reasoning_effort)
            .finish()
    }
}
