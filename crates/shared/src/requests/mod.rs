//! Request bodies accepted by the gateway.
//!
//! Required fields are `Option` on the wire so that a missing field reaches
//! the handler and is reported with a specific message instead of a generic
//! deserialization failure.

pub mod llm;
pub mod video;

pub use llm::{ChatMessage, ChatOverrides, ChatRequest, EnhanceRequest, VideoPromptContext, VideoPromptRequest};
pub use video::{
    ComplianceRequest, VideoEditOptions, VideoEditRequest, VideoGenerationRequest,
    VideoStatusQuery,
};
