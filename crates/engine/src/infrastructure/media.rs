//! Simulated media processor.
//!
//! Stands in for a real transcoder and metadata reader: every planned step is logged,
//! processing takes a fixed delay, and metadata reads return canned values.

use async_trait::async_trait;
use std::time::Duration;

use reelgate_domain::VideoMetadata;

use crate::infrastructure::ports::{EditJob, MediaError, MediaProcessorPort};

/// Default simulated processing time.
pub const DEFAULT_EDIT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct SimulatedMediaProcessor {
    delay: Duration,
}

impl SimulatedMediaProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedMediaProcessor {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_EDIT_DELAY_MS))
    }
}

#[async_trait]
impl MediaProcessorPort for SimulatedMediaProcessor {
    async fn process(&self, job: EditJob) -> Result<bool, MediaError> {
        tracing::info!(
            input = %job.input_path,
            output = %job.output_path,
            steps = job.plan.len(),
            "Processing video"
        );
        if job.plan.is_passthrough() {
            tracing::debug!("No edit steps requested, output is a copy of the input");
        }
        for (index, operation) in job.plan.operations.iter().enumerate() {
            tracing::debug!(step = index + 1, operation = %operation, "Edit step");
        }
        if !job.extra.is_empty() {
            let keys: Vec<&str> = job.extra.keys().map(String::as_str).collect();
            tracing::debug!(?keys, "Passing through extra edit options");
        }

        tokio::time::sleep(self.delay).await;
        Ok(true)
    }

    async fn read_metadata(&self, video_path: &str) -> Result<VideoMetadata, MediaError> {
        tracing::debug!(path = %video_path, "Reading video metadata (simulated)");
        Ok(VideoMetadata::simulated())
    }
}
