//! Reelgate domain vocabulary.
//!
//! Pure types shared by the gateway and its clients: generation modes and
//! task states, edit planning, compliance rules, and LLM provider defaults.
//! Nothing in here performs I/O.

pub mod compliance;
pub mod editing;
pub mod error;
pub mod llm;
pub mod task;
pub mod video;

pub use compliance::{ComplianceReport, VideoMetadata};
pub use editing::{
    EditOperation, EditOptions, EditPlan, Resolution, Watermark, WatermarkPosition,
};
pub use error::DomainError;
pub use llm::{ChatRole, LlmConfig, LlmProvider, ProviderDefaults, ReasoningEffort};
pub use task::TaskState;
pub use video::{GenerationMode, ModeInput, VideoConfig};
