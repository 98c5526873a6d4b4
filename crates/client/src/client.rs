//! Typed HTTP client for the gateway.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use reelgate_shared::{
    ChatCompletionResponse, ChatMessage, ChatRequest, ComplianceRequest, ComplianceResponse,
    EnhanceRequest, EnhanceResponse, ErrorResponse, ProviderInfoResponse, TaskEnvelope,
    VideoEditRequest, VideoEditResponse, VideoGenerationRequest, VideoPromptRequest,
    VideoPromptResponse,
};

use crate::error::ClientError;
use crate::poller::{PollConfig, TaskPoller, TaskStatusSource};

#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// `base_url` is the gateway origin, e.g. `http://localhost:8787`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        decode(response).await
    }

    // =========================================================================
    // Video
    // =========================================================================

    /// Submit a generation task. The returned envelope carries the task id.
    pub async fn generate_video(
        &self,
        request: &VideoGenerationRequest,
    ) -> Result<TaskEnvelope, ClientError> {
        self.post("video/generate", request).await
    }

    pub async fn video_status(&self, task_id: &str) -> Result<TaskEnvelope, ClientError> {
        let response = self
            .client
            .get(self.url("video/status"))
            .query(&[("taskId", task_id)])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn edit_video(
        &self,
        request: &VideoEditRequest,
    ) -> Result<VideoEditResponse, ClientError> {
        self.post("video/edit", request).await
    }

    pub async fn check_compliance(
        &self,
        request: &ComplianceRequest,
    ) -> Result<ComplianceResponse, ClientError> {
        self.post("video/compliance", request).await
    }

    /// Poll [`Self::video_status`] until the task finishes or `config` runs out.
    pub async fn poll_for_completion(
        &self,
        task_id: &str,
        config: PollConfig,
    ) -> Result<TaskEnvelope, ClientError> {
        TaskPoller::new(Arc::new(self.clone()), config)
            .wait_for(task_id)
            .await
    }

    // =========================================================================
    // LLM
    // =========================================================================

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatCompletionResponse, ClientError> {
        self.post("llm/chat", request).await
    }

    /// One-shot chat returning the first choice's content, or an empty string.
    pub async fn simple_chat(
        &self,
        message: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, ClientError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(message));

        let completion = self
            .chat(&ChatRequest {
                messages,
                config: None,
            })
            .await?;
        Ok(completion.first_content().to_string())
    }

    pub async fn video_prompt(
        &self,
        request: &VideoPromptRequest,
    ) -> Result<VideoPromptResponse, ClientError> {
        self.post("llm/VideoPrompt", request).await
    }

    pub async fn enhance_prompt(
        &self,
        request: &EnhanceRequest,
    ) -> Result<EnhanceResponse, ClientError> {
        self.post("llm/enhance", request).await
    }

    pub async fn provider_info(&self) -> Result<ProviderInfoResponse, ClientError> {
        self.get("llm/info").await
    }
}

#[async_trait]
impl TaskStatusSource for GatewayClient {
    async fn fetch_status(&self, task_id: &str) -> Result<TaskEnvelope, ClientError> {
        self.video_status(task_id).await
    }
}

/// Decode a success body, or turn the gateway's `{error}` body into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    type Captured = Arc<Mutex<Option<Value>>>;

    async fn spawn_gateway(router: Router) -> GatewayClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        GatewayClient::new(&format!("http://{}/", addr))
    }

    #[tokio::test]
    async fn generate_video_posts_request_and_returns_envelope() {
        let captured: Captured = Arc::default();
        let router = Router::new()
            .route(
                "/api/video/generate",
                post(
                    |State(captured): State<Captured>, Json(body): Json<Value>| async move {
                        *captured.lock().unwrap() = Some(body);
                        Json(json!({"output": {"task_id": "t-42", "task_status": "PENDING"}}))
                    },
                ),
            )
            .with_state(captured.clone());
        let client = spawn_gateway(router).await;

        let envelope = client
            .generate_video(&VideoGenerationRequest::new("a cat on a roof", "t2v"))
            .await
            .unwrap();

        assert_eq!(envelope.task_id(), Some("t-42"));
        let sent = captured.lock().unwrap().clone().unwrap();
        assert_eq!(sent, json!({"prompt": "a cat on a roof", "type": "t2v"}));
    }

    #[tokio::test]
    async fn error_body_becomes_api_error() {
        let router = Router::new().route(
            "/api/video/generate",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": "DASHSCOPE_API_KEY is not configured"})),
                )
            }),
        );
        let client = spawn_gateway(router).await;

        let err = client
            .generate_video(&VideoGenerationRequest::new("a cat", "t2v"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "DASHSCOPE_API_KEY is not configured");
    }

    #[tokio::test]
    async fn error_without_json_body_falls_back_to_status() {
        let router = Router::new().route(
            "/api/llm/info",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
        );
        let client = spawn_gateway(router).await;

        let err = client.provider_info().await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn video_status_sends_task_id_query() {
        let router = Router::new().route(
            "/api/video/status",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                Json(json!({"taskId": query.get("taskId"), "status": "processing"}))
            }),
        );
        let client = spawn_gateway(router).await;

        let envelope = client.video_status("task 1/2").await.unwrap();
        assert_eq!(envelope.task_id(), Some("task 1/2"));
        assert_eq!(envelope.status(), Some("processing"));
    }

    #[tokio::test]
    async fn simple_chat_sends_system_and_user_messages() {
        let captured: Captured = Arc::default();
        let router = Router::new()
            .route(
                "/api/llm/chat",
                post(
                    |State(captured): State<Captured>, Json(body): Json<Value>| async move {
                        *captured.lock().unwrap() = Some(body);
                        Json(json!({
                            "id": "c-1",
                            "object": "chat.completion",
                            "created": 0,
                            "model": "deepseek-chat",
                            "choices": [{
                                "index": 0,
                                "message": {"role": "assistant", "content": "Hi there"},
                                "finish_reason": "stop"
                            }]
                        }))
                    },
                ),
            )
            .with_state(captured.clone());
        let client = spawn_gateway(router).await;

        let reply = client.simple_chat("hello", Some("be brief")).await.unwrap();

        assert_eq!(reply, "Hi there");
        let sent = captured.lock().unwrap().clone().unwrap();
        assert_eq!(
            sent["messages"],
            json!([
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hello"}
            ])
        );
    }

    #[tokio::test]
    async fn simple_chat_without_choices_is_empty() {
        let router = Router::new().route(
            "/api/llm/chat",
            post(|| async {
                Json(json!({
                    "id": "c-1",
                    "object": "chat.completion",
                    "created": 0,
                    "model": "deepseek-chat",
                    "choices": []
                }))
            }),
        );
        let client = spawn_gateway(router).await;

        assert_eq!(client.simple_chat("hello", None).await.unwrap(), "");
    }

    #[tokio::test]
    async fn enhance_prompt_decodes_camel_case() {
        let router = Router::new().route(
            "/api/llm/enhance",
            post(|| async {
                Json(json!({
                    "enhancedPrompt": "A tabby cat at golden hour",
                    "suggestions": ["add camera motion"],
                    "keywords": ["cat"]
                }))
            }),
        );
        let client = spawn_gateway(router).await;

        let enhanced = client
            .enhance_prompt(&EnhanceRequest {
                prompt: Some("cat".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(enhanced.enhanced_prompt, "A tabby cat at golden hour");
        assert_eq!(enhanced.keywords, vec!["cat".to_string()]);
    }

    #[tokio::test]
    async fn poll_for_completion_follows_status_until_done() {
        let calls = Arc::new(AtomicU32::new(0));
        let router = Router::new()
            .route(
                "/api/video/status",
                get(|State(calls): State<Arc<AtomicU32>>| async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    let status = if n < 3 { "RUNNING" } else { "SUCCEEDED" };
                    Json(json!({"output": {"task_id": "t-1", "task_status": status}}))
                }),
            )
            .with_state(calls.clone());
        let client = spawn_gateway(router).await;

        let envelope = client
            .poll_for_completion("t-1", PollConfig::new(Duration::from_millis(10), 5))
            .await
            .unwrap();

        assert_eq!(envelope.status(), Some("SUCCEEDED"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
