//! Client errors.

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The gateway answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Video generation timed out after {seconds} seconds")]
    Timeout { attempts: u32, seconds: f64 },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
