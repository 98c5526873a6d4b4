//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Video generation (could swap DashScope -> another provider)
//! - LLM calls (any OpenAI-compatible chat endpoint)
//! - Media processing (simulated today, FFmpeg-backed later)

mod error;
mod external;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    EditJob, LlmPort, LlmRequest, MediaProcessorPort, VideoGenPort, VideoGenRequest,
};

#[cfg(test)]
pub use external::{MockLlmPort, MockMediaProcessorPort, MockVideoGenPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{LlmError, MediaError, VideoGenError};
