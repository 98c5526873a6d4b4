//! Query a generation task.

use serde_json::Value;
use std::sync::Arc;

use crate::infrastructure::ports::VideoGenPort;
use crate::use_cases::validation::{present, ValidationError};

use super::VideoError;

pub struct GetVideoStatus {
    video_gen: Arc<dyn VideoGenPort>,
}

impl GetVideoStatus {
    pub fn new(video_gen: Arc<dyn VideoGenPort>) -> Self {
        Self { video_gen }
    }

    pub async fn execute(&self, task_id: Option<&str>) -> Result<Value, VideoError> {
        let task_id =
            present(task_id).ok_or(ValidationError::MissingParameter("taskId"))?;

        tracing::debug!(task_id = %task_id, "Polling video task");
        let response = self.video_gen.task_status(task_id).await.inspect_err(|e| {
            tracing::warn!(task_id = %task_id, error = %e, "Video status request failed");
        })?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockVideoGenPort, VideoGenError};
    use serde_json::json;

    #[tokio::test]
    async fn when_task_id_missing_returns_validation_error() {
        let use_case = GetVideoStatus::new(Arc::new(MockVideoGenPort::new()));

        let err = use_case.execute(None).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing taskId parameter");
        let err = use_case.execute(Some("")).await.unwrap_err();
        assert!(matches!(err, VideoError::Validation(_)));
    }

    #[tokio::test]
    async fn relays_provider_status() {
        let mut video_gen = MockVideoGenPort::new();
        video_gen
            .expect_task_status()
            .withf(|task_id| task_id == "t-9")
            .times(1)
            .returning(|_| Ok(json!({"output": {"task_id": "t-9", "task_status": "SUCCEEDED"}})));

        let use_case = GetVideoStatus::new(Arc::new(video_gen));
        let result = use_case.execute(Some("t-9")).await.unwrap();
        assert_eq!(result["output"]["task_status"], "SUCCEEDED");
    }

    #[tokio::test]
    async fn poll_failure_keeps_upstream_message() {
        let mut video_gen = MockVideoGenPort::new();
        video_gen.expect_task_status().returning(|_| {
            Err(VideoGenError::PollFailed {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let use_case = GetVideoStatus::new(Arc::new(video_gen));
        let err = use_case.execute(Some("t-1")).await.unwrap_err();
        assert_eq!(err.to_string(), "Polling request failed: 500 boom");
    }
}
