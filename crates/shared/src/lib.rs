//! Reelgate Shared - wire types for the gateway and its clients
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Mirror upstream shapes** - Field names follow what the UI and providers send

pub mod requests;
pub mod responses;

pub use requests::{
    ChatMessage, ChatOverrides, ChatRequest, ComplianceRequest, EnhanceRequest,
    VideoEditOptions, VideoEditRequest, VideoGenerationRequest, VideoPromptContext,
    VideoPromptRequest, VideoStatusQuery,
};
pub use responses::{
    ApiIndexResponse, ChatChoice, ChatCompletionResponse, ChatUsage, ChoiceMessage,
    ComplianceResponse, EnhanceResponse, ErrorResponse, ProviderInfoResponse, ProviderStatus,
    TaskEnvelope, VideoEditResponse, VideoPromptResponse,
};
