//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod correlation;
pub mod dashscope;
pub mod llm_client;
pub mod media;
pub mod ports;
