//! Raw chat completion passthrough.

use std::sync::Arc;

use reelgate_shared::{ChatCompletionResponse, ChatRequest};

use crate::infrastructure::ports::{LlmPort, LlmRequest};
use crate::use_cases::validation::{require_non_empty, ValidationError};

use super::LlmUseCaseError;

pub struct Chat {
    llm: Arc<dyn LlmPort>,
}

impl Chat {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub async fn execute(&self, request: ChatRequest) -> Result<ChatCompletionResponse, LlmUseCaseError> {
        if request.messages.is_empty() {
            return Err(ValidationError::MissingField("messages").into());
        }
        for message in &request.messages {
            require_non_empty(&message.content, "content")?;
        }

        let overrides = request.config.unwrap_or_default();
        let llm_request = LlmRequest::new(request.messages)
            .with_temperature(overrides.temperature)
            .with_max_tokens(overrides.max_tokens)
            .with_reasoning_effort(overrides.reasoning_effort);

        let completion = self.llm.chat(llm_request).await?;
        if let Some(usage) = &completion.usage {
            tracing::debug!(
                model = %completion.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion"
            );
        }
        Ok(completion)
    }
}
