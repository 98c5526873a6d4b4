//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases validate requests, call ports, and shape responses.

pub mod llm;
pub mod validation;
pub mod video;

pub use llm::LlmUseCases;
pub use video::VideoUseCases;
