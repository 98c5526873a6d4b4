//! Response bodies returned by the gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use reelgate_domain::{ComplianceReport, TaskState};

// =============================================================================
// Errors
// =============================================================================

/// Body of every non-2xx gateway response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// Video
// =============================================================================

/// A provider task payload as relayed by the gateway.
///
/// The gateway forwards provider JSON untouched, so this wraps the raw value
/// and knows where the interesting fields live in both the flat
/// (`{"taskId", "status", "videoUrl"}`) and the DashScope
/// (`{"output": {"task_id", "task_status", "video_url"}}`) layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskEnvelope(pub Value);

impl TaskEnvelope {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    fn field(&self, flat: &str, nested: &str) -> Option<&str> {
        self.0
            .get(flat)
            .and_then(Value::as_str)
            .or_else(|| {
                self.0
                    .get("output")
                    .and_then(|o| o.get(nested))
                    .and_then(Value::as_str)
            })
    }

    pub fn task_id(&self) -> Option<&str> {
        self.field("taskId", "task_id")
    }

    pub fn status(&self) -> Option<&str> {
        self.field("status", "task_status")
    }

    pub fn video_url(&self) -> Option<&str> {
        self.field("videoUrl", "video_url")
    }

    /// Normalized state; a payload without any status is `Unknown`.
    pub fn state(&self) -> TaskState {
        self.status().map(TaskState::parse).unwrap_or(TaskState::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEditResponse {
    pub success: bool,
    pub message: String,
}

impl VideoEditResponse {
    pub fn from_outcome(success: bool) -> Self {
        let message = if success {
            "Video processed successfully"
        } else {
            "Video processing failed"
        };
        Self {
            success,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResponse {
    pub compliant: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl From<ComplianceReport> for ComplianceResponse {
    fn from(report: ComplianceReport) -> Self {
        Self {
            compliant: report.compliant,
            issues: report.issues,
            recommendations: report.recommendations,
        }
    }
}

/// `GET /api` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndexResponse {
    pub name: String,
    pub endpoints: Vec<String>,
}

// =============================================================================
// LLM
// =============================================================================

/// OpenAI-compatible chat completion, relayed field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ChatUsage>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or empty.
    pub fn first_content(&self) -> &str {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_cache_hit_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_cache_miss_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPromptResponse {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_prompt: String,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderStatus {
    Configured,
    NotConfigured,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfoResponse {
    pub provider: String,
    pub model: String,
    pub base_url: String,
    pub status: ProviderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
