//! Prompt enhancement with a structured JSON answer.

use serde::Deserialize;
use std::sync::Arc;

use reelgate_shared::{ChatMessage, EnhanceRequest, EnhanceResponse};

use crate::infrastructure::ports::{LlmPort, LlmRequest};
use crate::use_cases::validation::{present, ValidationError};

use super::LlmUseCaseError;

pub struct EnhancePrompt {
    llm: Arc<dyn LlmPort>,
    system_template: String,
}

impl EnhancePrompt {
    pub fn new(llm: Arc<dyn LlmPort>, system_template: impl Into<String>) -> Self {
        Self {
            llm,
            system_template: system_template.into(),
        }
    }

    pub async fn execute(&self, request: EnhanceRequest) -> Result<EnhanceResponse, LlmUseCaseError> {
        let prompt = present(request.prompt.as_deref()).ok_or(ValidationError::MissingField("prompt"))?;

        let messages = vec![
            ChatMessage::system(self.system_template.clone()),
            ChatMessage::user(prompt),
        ];
        let completion = self.llm.chat(LlmRequest::new(messages)).await?;

        Ok(parse_enhancement(completion.first_content(), prompt))
    }
}

#[derive(Debug, Deserialize)]
struct RawEnhancement {
    #[serde(default, rename = "enhancedPrompt")]
    enhanced_prompt: Option<String>,
    #[serde(default)]
    suggestions: Option<Vec<String>>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
}

/// Parse the model's JSON answer. Anything unparseable falls back to the
/// original prompt with no suggestions or keywords.
fn parse_enhancement(content: &str, original: &str) -> EnhanceResponse {
    match serde_json::from_str::<RawEnhancement>(strip_code_fence(content)) {
        Ok(raw) => EnhanceResponse {
            enhanced_prompt: raw
                .enhanced_prompt
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| original.to_string()),
            suggestions: raw.suggestions.unwrap_or_default(),
            keywords: raw.keywords.unwrap_or_default(),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Enhancement answer was not valid JSON, returning prompt unchanged");
            EnhanceResponse {
                enhanced_prompt: original.to_string(),
                suggestions: Vec::new(),
                keywords: Vec::new(),
            }
        }
    }
}

/// Remove a surrounding markdown code fence (```json ... ```), if present.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") on the opening line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}
