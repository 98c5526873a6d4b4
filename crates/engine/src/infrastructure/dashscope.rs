//! DashScope video generation client
//!
//! Implements the VideoGenPort trait against DashScope's async task API.
//! Generation is submitted to a per-mode service path; progress is read
//! back from `/tasks/{id}`. Responses are relayed untouched.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{json, Map, Value};
use std::time::Duration;

use reelgate_domain::VideoConfig;

use crate::infrastructure::ports::{VideoGenError, VideoGenPort, VideoGenRequest};

/// Default DashScope API base URL.
pub const DEFAULT_DASHSCOPE_BASE_URL: &str = "https://dashscope.aliyuncs.com/api/v1";

/// Default timeout for a single provider round trip.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for the DashScope video generation API
#[derive(Clone)]
pub struct DashScopeClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl DashScopeClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self::with_timeout(base_url, api_key, DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, VideoGenError> {
        self.api_key.as_deref().ok_or(VideoGenError::MissingApiKey)
    }

    /// `{base}/tasks/{task_id}` with the id encoded as a single path segment.
    fn task_url(&self, task_id: &str) -> Result<Url, VideoGenError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| VideoGenError::RequestFailed(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                VideoGenError::RequestFailed(format!("Invalid base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("tasks")
            .push(task_id);
        Ok(url)
    }

    /// Build the upstream body `{model, input, parameters}`.
    ///
    /// `parameters` is the caller's params with `video_cfg` replaced by the
    /// defaults overlaid with whatever `video_cfg` the caller sent.
    pub fn build_request_body(request: &VideoGenRequest) -> Value {
        let mode = request.mode;

        let mut input = Map::new();
        input.insert("prompt".to_string(), Value::String(request.prompt.clone()));
        if let Some(extra) = mode.extra_input() {
            if let Some(value) = request.params.get(extra.param_key) {
                input.insert(extra.input_key.to_string(), value.clone());
            }
        }

        let defaults = VideoConfig::default();
        let mut video_cfg = Map::new();
        video_cfg.insert("duration".to_string(), json!(defaults.duration));
        video_cfg.insert("width".to_string(), json!(defaults.width));
        video_cfg.insert("height".to_string(), json!(defaults.height));
        if let Some(Value::Object(overrides)) = request.params.get("video_cfg") {
            for (key, value) in overrides {
                video_cfg.insert(key.clone(), value.clone());
            }
        }

        let mut parameters = request.params.clone();
        parameters.insert("video_cfg".to_string(), Value::Object(video_cfg));

        json!({
            "model": mode.model(),
            "input": input,
            "parameters": parameters,
        })
    }
}

#[async_trait]
impl VideoGenPort for DashScopeClient {
    async fn submit(&self, request: VideoGenRequest) -> Result<Value, VideoGenError> {
        let api_key = self.api_key()?;
        let body = Self::build_request_body(&request);

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, request.mode.service_path()))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VideoGenError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::SubmitFailed {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| VideoGenError::InvalidResponse(e.to_string()))
    }

    async fn task_status(&self, task_id: &str) -> Result<Value, VideoGenError> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .get(self.task_url(task_id)?)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| VideoGenError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::PollFailed {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| VideoGenError::InvalidResponse(e.to_string()))
    }
}
