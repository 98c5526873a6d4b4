//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{LlmPort, MediaProcessorPort, VideoGenPort};
use crate::prompt_templates::PromptTemplates;
use crate::use_cases::{self, LlmUseCases, VideoUseCases};

/// Main application state.
///
/// Holds the use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub video: VideoUseCases,
    pub llm: LlmUseCases,
}

impl App {
    /// Wire use cases to the given ports.
    pub fn new(
        video_gen: Arc<dyn VideoGenPort>,
        llm: Arc<dyn LlmPort>,
        media: Arc<dyn MediaProcessorPort>,
        templates: PromptTemplates,
    ) -> Self {
        let video = VideoUseCases::new(
            Arc::new(use_cases::video::GenerateVideo::new(video_gen.clone())),
            Arc::new(use_cases::video::GetVideoStatus::new(video_gen)),
            Arc::new(use_cases::video::EditVideo::new(media.clone())),
            Arc::new(use_cases::video::CheckCompliance::new(media)),
        );

        let llm = LlmUseCases::new(
            Arc::new(use_cases::llm::Chat::new(llm.clone())),
            Arc::new(use_cases::llm::GenerateVideoPrompt::new(
                llm.clone(),
                templates.video_prompt_system,
            )),
            Arc::new(use_cases::llm::EnhancePrompt::new(
                llm.clone(),
                templates.enhance_system,
            )),
            Arc::new(use_cases::llm::ProviderInfo::new(llm)),
        );

        Self {
            use_cases: UseCases { video, llm },
        }
    }
}
