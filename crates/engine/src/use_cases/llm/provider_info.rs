//! Report which LLM provider the gateway is configured for.

use std::sync::Arc;

use reelgate_shared::{ProviderInfoResponse, ProviderStatus};

use crate::infrastructure::ports::LlmPort;

pub struct ProviderInfo {
    llm: Arc<dyn LlmPort>,
}

impl ProviderInfo {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub fn execute(&self) -> ProviderInfoResponse {
        let config = self.llm.config();
        let (status, message) = if config.is_configured() {
            (ProviderStatus::Configured, None)
        } else {
            (ProviderStatus::NotConfigured, Some(config.missing_key_message()))
        };

        ProviderInfoResponse {
            provider: config.provider.as_str().to_string(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            status,
            message,
        }
    }
}
