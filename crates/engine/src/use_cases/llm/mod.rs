//! LLM proxy use cases.

use std::sync::Arc;

mod chat;
mod enhance_prompt;
mod error;
mod provider_info;
mod video_prompt;

pub use chat::Chat;
pub use enhance_prompt::EnhancePrompt;
pub use error::LlmUseCaseError;
pub use provider_info::ProviderInfo;
pub use video_prompt::GenerateVideoPrompt;

/// Container for LLM use cases.
pub struct LlmUseCases {
    pub chat: Arc<Chat>,
    pub video_prompt: Arc<GenerateVideoPrompt>,
    pub enhance: Arc<EnhancePrompt>,
    pub info: Arc<ProviderInfo>,
}

impl LlmUseCases {
    pub fn new(
        chat: Arc<Chat>,
        video_prompt: Arc<GenerateVideoPrompt>,
        enhance: Arc<EnhancePrompt>,
        info: Arc<ProviderInfo>,
    ) -> Self {
        Self {
            chat,
            video_prompt,
            enhance,
            info,
        }
    }
}
