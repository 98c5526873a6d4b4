//! External service port traits (video generation, LLM, media processing).

use async_trait::async_trait;
use serde_json::{Map, Value};

use reelgate_domain::{EditPlan, GenerationMode, LlmConfig, ReasoningEffort, VideoMetadata};
use reelgate_shared::{ChatCompletionResponse, ChatMessage};

use super::error::{LlmError, MediaError, VideoGenError};

// =============================================================================
// Video Generation
// =============================================================================

/// A validated generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoGenRequest {
    pub mode: GenerationMode,
    pub prompt: String,
    /// Caller parameters, forwarded to the provider.
    pub params: Map<String, Value>,
}

impl VideoGenRequest {
    pub fn new(mode: GenerationMode, prompt: impl Into<String>) -> Self {
        Self {
            mode,
            prompt: prompt.into(),
            params: Map::new(),
        }
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }
}

/// Provider responses are relayed verbatim, so both calls return raw JSON.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoGenPort: Send + Sync {
    async fn submit(&self, request: VideoGenRequest) -> Result<Value, VideoGenError>;
    async fn task_status(&self, task_id: &str) -> Result<Value, VideoGenError>;
}

// =============================================================================
// LLM
// =============================================================================

/// Chat request with optional per-call overrides of the provider config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_reasoning_effort(mut self, effort: Option<ReasoningEffort>) -> Self {
        self.reasoning_effort = effort;
        self
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn chat(&self, request: LlmRequest) -> Result<ChatCompletionResponse, LlmError>;

    /// The resolved provider configuration this client talks to.
    fn config(&self) -> LlmConfig;
}

// =============================================================================
// Media Processing
// =============================================================================

/// One edit request, resolved into an ordered plan.
#[derive(Debug, Clone, PartialEq)]
pub struct EditJob {
    pub input_path: String,
    pub output_path: String,
    pub plan: EditPlan,
    /// Unrecognized option keys, passed through to the processor.
    pub extra: Map<String, Value>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaProcessorPort: Send + Sync {
    /// Run the job. `Ok(false)` means the processor ran but did not produce output.
    async fn process(&self, job: EditJob) -> Result<bool, MediaError>;

    async fn read_metadata(&self, video_path: &str) -> Result<VideoMetadata, MediaError>;
}
