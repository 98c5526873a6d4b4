//! Submit a video generation task.

use serde_json::{Map, Value};
use std::sync::Arc;

use reelgate_domain::GenerationMode;
use reelgate_shared::{TaskEnvelope, VideoGenerationRequest};

use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::{VideoGenPort, VideoGenRequest};
use crate::use_cases::validation::{present, ValidationError};

use super::VideoError;

pub struct GenerateVideo {
    video_gen: Arc<dyn VideoGenPort>,
}

impl GenerateVideo {
    pub fn new(video_gen: Arc<dyn VideoGenPort>) -> Self {
        Self { video_gen }
    }

    /// Validate the request and submit it upstream.
    ///
    /// Returns the provider's response unchanged (it carries the task id).
    pub async fn execute(&self, request: VideoGenerationRequest) -> Result<Value, VideoError> {
        let (Some(prompt), Some(mode)) = (
            present(request.prompt.as_deref()),
            present(request.mode.as_deref()),
        ) else {
            return Err(ValidationError::MissingFields(&["prompt", "type"]).into());
        };
        let mode: GenerationMode = mode.parse()?;

        let params = match request.params {
            Some(Value::Object(map)) => map,
            Some(Value::Null) | None => Map::new(),
            Some(other) => {
                tracing::debug!(params = %other, "Ignoring non-object params");
                Map::new()
            }
        };

        let correlation_id = CorrelationId::new();
        tracing::info!(
            correlation_id = %correlation_id.short(),
            mode = %mode,
            "Submitting video generation"
        );

        let response = self
            .video_gen
            .submit(VideoGenRequest::new(mode, prompt).with_params(params))
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    correlation_id = %correlation_id.short(),
                    error = %e,
                    "Video generation request failed"
                );
            })?;

        let envelope = TaskEnvelope::new(response);
        tracing::info!(
            correlation_id = %correlation_id.short(),
            task_id = envelope.task_id().unwrap_or("-"),
            status = envelope.status().unwrap_or("-"),
            "Video generation submitted"
        );
        Ok(envelope.into_raw())
    }
}
