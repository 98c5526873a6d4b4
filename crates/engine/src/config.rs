//! Gateway configuration from environment variables.

use std::fmt;
use std::str::FromStr;

use reelgate_domain::{DomainError, LlmConfig, LlmProvider, ReasoningEffort};

use crate::infrastructure::dashscope::{DEFAULT_DASHSCOPE_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::infrastructure::media::DEFAULT_EDIT_DELAY_MS;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8787;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid LLM_PROVIDER: {0}")]
    Provider(#[from] DomainError),
}

#[derive(Clone)]
pub struct GatewayConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Raw `CORS_ALLOWED_ORIGINS` value: `*` or a comma separated list.
    pub cors_allowed_origins: String,
    pub dashscope_api_key: Option<String>,
    pub dashscope_base_url: String,
    pub video_request_timeout_secs: u64,
    pub video_edit_delay_ms: u64,
    pub llm: LlmConfig,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let provider = match get("LLM_PROVIDER") {
            Some(raw) => raw.parse::<LlmProvider>()?,
            None => LlmProvider::default(),
        };

        let mut llm = LlmConfig::for_provider(provider, get(provider.api_key_env_var()));
        if let Some(base_url) = get("LLM_BASE_URL") {
            llm.base_url = base_url;
        }
        if let Some(model) = get("LLM_MODEL") {
            llm.model = model;
        }
        llm.temperature = parse_or(&get, "LLM_TEMPERATURE", llm.temperature);
        llm.max_tokens = parse_or(&get, "LLM_MAX_TOKENS", llm.max_tokens);
        llm.timeout_ms = parse_or(&get, "LLM_TIMEOUT_MS", llm.timeout_ms);
        llm.reasoning_effort = get("LLM_REASONING_EFFORT").and_then(|raw| {
            raw.parse::<ReasoningEffort>()
                .inspect_err(|e| tracing::warn!(error = %e, "Ignoring LLM_REASONING_EFFORT"))
                .ok()
        });

        let server_port = match get("SERVER_PORT") {
            Some(_) => parse_or(&get, "SERVER_PORT", DEFAULT_SERVER_PORT),
            None => parse_or(&get, "PORT", DEFAULT_SERVER_PORT),
        };

        Ok(Self {
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()),
            dashscope_api_key: get("DASHSCOPE_API_KEY"),
            dashscope_base_url: get("DASHSCOPE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DASHSCOPE_BASE_URL.to_string()),
            video_request_timeout_secs: parse_or(
                &get,
                "VIDEO_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            video_edit_delay_ms: parse_or(&get, "VIDEO_EDIT_DELAY_MS", DEFAULT_EDIT_DELAY_MS),
            llm,
        })
    }
}

/// Parse `var` or fall back to `default`, warning when the value is malformed.
fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, var: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    match get(var) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(var, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field(
                "dashscope_api_key",
                &self.dashscope_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("dashscope_base_url", &self.dashscope_base_url)
            .field("video_request_timeout_secs", &self.video_request_timeout_secs)
            .field("video_edit_delay_ms", &self.video_edit_delay_ms)
            .field("llm", &self.llm)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8787);
        assert_eq!(config.cors_allowed_origins, "*");
        assert!(config.dashscope_api_key.is_none());
        assert_eq!(config.dashscope_base_url, "https://dashscope.aliyuncs.com/api/v1");
        assert_eq!(config.video_request_timeout_secs, 60);
        assert_eq!(config.video_edit_delay_ms, 2000);
        assert_eq!(config.llm.provider, LlmProvider::DeepSeek);
        assert_eq!(config.llm.model, "deepseek-chat");
        assert!(!config.llm.is_configured());
    }

    #[test]
    fn provider_selects_key_variable_and_defaults() {
        let config = config(&[
            ("LLM_PROVIDER", "OpenAI"),
            ("OPENAI_API_KEY", "sk-openai"),
            ("DEEPSEEK_API_KEY", "sk-deepseek"),
        ])
        .unwrap();
        assert_eq!(config.llm.provider, LlmProvider::OpenAi);
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-openai"));
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn llm_overrides_apply_on_top_of_provider_defaults() {
        let config = config(&[
            ("LLM_MODEL", "deepseek-reasoner"),
            ("LLM_MAX_TOKENS", "1024"),
            ("LLM_TIMEOUT_MS", "5000"),
            ("LLM_REASONING_EFFORT", "medium"),
        ])
        .unwrap();
        assert_eq!(config.llm.model, "deepseek-reasoner");
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.llm.timeout_ms, 5000);
        assert_eq!(config.llm.reasoning_effort, Some(ReasoningEffort::Medium));
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let config = config(&[
            ("SERVER_PORT", "eighty"),
            ("LLM_MAX_TOKENS", "-1"),
            ("VIDEO_EDIT_DELAY_MS", "soon"),
            ("LLM_REASONING_EFFORT", "extreme"),
        ])
        .unwrap();
        assert_eq!(config.server_port, 8787);
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(config.video_edit_delay_ms, 2000);
        assert!(config.llm.reasoning_effort.is_none());
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        assert_eq!(config(&[("PORT", "9000")]).unwrap().server_port, 9000);
        assert_eq!(
            config(&[("PORT", "9000"), ("SERVER_PORT", "9100")])
                .unwrap()
                .server_port,
            9100
        );
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let err = config(&[("LLM_PROVIDER", "anthropic")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid LLM_PROVIDER: Unsupported LLM provider: anthropic"
        );
    }

    #[test]
    fn debug_output_hides_keys() {
        let config = config(&[("DASHSCOPE_API_KEY", "sk-video"), ("DEEPSEEK_API_KEY", "sk-llm")]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-video"));
        assert!(!debug.contains("sk-llm"));
    }
}
