//! Bounded polling of a video generation task.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use reelgate_shared::TaskEnvelope;

use crate::error::ClientError;

/// Default delay between status requests.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Default number of status requests (two minutes at the default interval).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollConfig {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Total wait advertised in the timeout error: attempts times interval,
    /// saturating at [`Duration::MAX`].
    pub fn budget(&self) -> Duration {
        self.interval.saturating_mul(self.max_attempts)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_MAX_ATTEMPTS)
    }
}

/// Anything that can report the current state of a task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStatusSource: Send + Sync {
    async fn fetch_status(&self, task_id: &str) -> Result<TaskEnvelope, ClientError>;
}

pub struct TaskPoller {
    source: Arc<dyn TaskStatusSource>,
    config: PollConfig,
}

impl TaskPoller {
    pub fn new(source: Arc<dyn TaskStatusSource>, config: PollConfig) -> Self {
        Self { source, config }
    }

    /// Poll until the task reaches a terminal state or the attempts run out.
    ///
    /// A failed or canceled task is returned as-is; only exhausting the
    /// attempt budget is an error. Status request errors abort the wait.
    pub async fn wait_for(&self, task_id: &str) -> Result<TaskEnvelope, ClientError> {
        let PollConfig {
            interval,
            max_attempts,
        } = self.config;

        for attempt in 1..=max_attempts {
            let envelope = self.source.fetch_status(task_id).await?;
            let state = envelope.state();
            tracing::debug!(task_id, attempt, max_attempts, state = %state, "Polled task status");

            if state.is_terminal() {
                return Ok(envelope);
            }
            if attempt < max_attempts {
                tokio::time::sleep(interval).await;
            }
        }

        tracing::warn!(task_id, max_attempts, "Task did not finish within the polling budget");
        Err(ClientError::Timeout {
            attempts: max_attempts,
            seconds: self.config.budget().as_secs_f64(),
        })
    }
}
