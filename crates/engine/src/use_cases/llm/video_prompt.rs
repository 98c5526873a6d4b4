//! Turn a rough idea into a detailed video generation prompt.

use std::sync::Arc;

use reelgate_shared::{ChatMessage, VideoPromptContext, VideoPromptRequest, VideoPromptResponse};

use crate::infrastructure::ports::{LlmPort, LlmRequest};
use crate::use_cases::validation::{present, ValidationError};

use super::LlmUseCaseError;

pub struct GenerateVideoPrompt {
    llm: Arc<dyn LlmPort>,
    system_template: String,
}

impl GenerateVideoPrompt {
    pub fn new(llm: Arc<dyn LlmPort>, system_template: impl Into<String>) -> Self {
        Self {
            llm,
            system_template: system_template.into(),
        }
    }

    pub async fn execute(&self, request: VideoPromptRequest) -> Result<VideoPromptResponse, LlmUseCaseError> {
        let prompt = present(request.prompt.as_deref()).ok_or(ValidationError::MissingField("prompt"))?;

        let messages = vec![
            ChatMessage::system(build_system_prompt(
                &self.system_template,
                request.context.as_ref(),
            )),
            ChatMessage::user(format!(
                "Generate a detailed video generation prompt: {}",
                prompt
            )),
        ];

        let completion = self.llm.chat(LlmRequest::new(messages)).await?;
        Ok(VideoPromptResponse {
            prompt: completion.first_content().to_string(),
        })
    }
}

/// Append the target specifications present in `context`, if any.
fn build_system_prompt(template: &str, context: Option<&VideoPromptContext>) -> String {
    let mut system = template.to_string();
    let Some(context) = context else {
        return system;
    };

    let mut details = Vec::new();
    if let Some(duration) = context.video_duration.filter(|d| *d > 0) {
        details.push(format!("Duration: {} seconds", duration));
    }
    if let Some(resolution) = present(context.resolution.as_deref()) {
        details.push(format!("Resolution: {}", resolution));
    }
    if let Some(style) = present(context.style.as_deref()) {
        details.push(format!("Style: {}", style));
    }

    if !details.is_empty() {
        system.push_str("\n\nTarget specifications:\n");
        system.push_str(&details.join("\n"));
    }
    system
}
