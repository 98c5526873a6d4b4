//! Error types for port operations.

/// Video generation provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoGenError {
    /// No API key was configured for the provider.
    #[error("DASHSCOPE_API_KEY is not configured")]
    MissingApiKey,

    /// The provider rejected a generation request.
    #[error("API request failed: {status} {body}")]
    SubmitFailed { status: u16, body: String },

    /// The provider rejected a status query.
    #[error("Polling request failed: {status} {body}")]
    PollFailed { status: u16, body: String },

    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("Video provider request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl VideoGenError {
    /// Whether the failure is on our side (missing configuration) rather than upstream.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    /// Carries the full explanation, including the expected env var.
    #[error("{0}")]
    MissingApiKey(String),

    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Media processing failed: {0}")]
    ProcessingFailed(String),
    #[error("Reading media metadata failed: {0}")]
    MetadataUnavailable(String),
}
