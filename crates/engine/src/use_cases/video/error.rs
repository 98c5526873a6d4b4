//! Video use case errors.

use reelgate_domain::DomainError;

use crate::infrastructure::ports::{MediaError, VideoGenError};
use crate::use_cases::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum VideoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown mode, bad resolution, invalid edit options.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Provider(#[from] VideoGenError),

    #[error(transparent)]
    Media(#[from] MediaError),
}
