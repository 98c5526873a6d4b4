//! Lifecycle state of a provider-side generation task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized task state.
///
/// Providers report status strings in their own casing and vocabulary
/// (`PENDING`, `RUNNING`, `SUCCEEDED`, `completed`, ...). Parsing never fails;
/// anything unrecognized becomes [`TaskState::Unknown`] and is treated as
/// still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Pending,
    Running,
    Succeeded,
    Failed,
    Canceled,
    Unknown,
}

impl TaskState {
    pub fn parse(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "submitted" | "pending" | "queued" => Self::Pending,
            "processing" | "running" => Self::Running,
            "completed" | "succeeded" | "success" => Self::Succeeded,
            "failed" => Self::Failed,
            "canceled" | "cancelled" => Self::Canceled,
            _ => Self::Unknown,
        }
    }

    /// Whether polling can stop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
