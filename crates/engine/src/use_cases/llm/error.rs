//! LLM use case errors.

use crate::infrastructure::ports::LlmError;
use crate::use_cases::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum LlmUseCaseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}
