//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use reelgate_shared::{
    ApiIndexResponse, ChatCompletionResponse, ChatRequest, ComplianceRequest, ComplianceResponse,
    EnhanceRequest, EnhanceResponse, ErrorResponse, ProviderInfoResponse, VideoEditRequest,
    VideoEditResponse, VideoGenerationRequest, VideoPromptRequest, VideoPromptResponse,
    VideoStatusQuery,
};

use crate::app::App;
use crate::use_cases::llm::LlmUseCaseError;
use crate::use_cases::video::VideoError;

const API_NAME: &str = "Reelgate Video Generation API";

const API_ENDPOINTS: &[&str] = &[
    "/api/video/generate - Generate video from text/image/reference",
    "/api/video/status - Check generation status",
    "/api/video/compliance - Validate YouTube compliance",
    "/api/video/edit - Edit and process videos",
    "/api/llm/chat - Chat completion through the configured LLM provider",
    "/api/llm/video-prompt - Turn an idea into a video generation prompt",
    "/api/llm/enhance - Enhance a video prompt",
    "/api/llm/info - Show the configured LLM provider",
];

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/video/generate", post(generate_video))
        .route("/api/video/status", get(video_status))
        .route("/api/video/compliance", post(check_compliance))
        .route("/api/video/edit", post(edit_video))
        .route("/api/llm/chat", post(chat))
        .route("/api/llm/VideoPrompt", post(video_prompt))
        .route("/api/llm/video-prompt", post(video_prompt))
        .route("/api/llm/enhance", post(enhance_prompt))
        .route("/api/llm/info", get(provider_info))
        .route("/api", any(api_index))
        .route("/api/", any(api_index))
        .route("/api/{*rest}", any(api_index))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

/// CORS for browser callers: `*` opens the API to any origin, otherwise
/// `allowed_origins` is a comma separated list. `None` when no listed
/// origin is a valid header value.
pub fn cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if allowed_origins.trim() == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(allowed_origins, "No valid CORS origins, cross-origin requests disabled");
        return None;
    }

    Some(cors.allow_origin(origins))
}

async fn health() -> &'static str {
    "OK"
}

async fn api_index() -> Json<ApiIndexResponse> {
    Json(ApiIndexResponse {
        name: API_NAME.to_string(),
        endpoints: API_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

// =============================================================================
// Video
// =============================================================================

async fn generate_video(
    State(app): State<Arc<App>>,
    payload: Result<Json<VideoGenerationRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let response = app.use_cases.video.generate.execute(request).await?;
    Ok(Json(response))
}

async fn video_status(
    State(app): State<Arc<App>>,
    query: Result<Query<VideoStatusQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let response = app
        .use_cases
        .video
        .status
        .execute(query.task_id.as_deref())
        .await?;
    Ok(Json(response))
}

async fn check_compliance(
    State(app): State<Arc<App>>,
    payload: Result<Json<ComplianceRequest>, JsonRejection>,
) -> Result<Json<ComplianceResponse>, ApiError> {
    let Json(request) = payload?;
    let report = app.use_cases.video.compliance.execute(request).await?;
    Ok(Json(report))
}

async fn edit_video(
    State(app): State<Arc<App>>,
    payload: Result<Json<VideoEditRequest>, JsonRejection>,
) -> Result<Json<VideoEditResponse>, ApiError> {
    let Json(request) = payload?;
    let outcome = app.use_cases.video.edit.execute(request).await?;
    Ok(Json(outcome))
}

// =============================================================================
// LLM
// =============================================================================

async fn chat(
    State(app): State<Arc<App>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatCompletionResponse>, ApiError> {
    let Json(request) = payload?;
    let completion = app.use_cases.llm.chat.execute(request).await?;
    Ok(Json(completion))
}

async fn video_prompt(
    State(app): State<Arc<App>>,
    payload: Result<Json<VideoPromptRequest>, JsonRejection>,
) -> Result<Json<VideoPromptResponse>, ApiError> {
    let Json(request) = payload?;
    let prompt = app.use_cases.llm.video_prompt.execute(request).await?;
    Ok(Json(prompt))
}

async fn enhance_prompt(
    State(app): State<Arc<App>>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, ApiError> {
    let Json(request) = payload?;
    let enhanced = app.use_cases.llm.enhance.execute(request).await?;
    Ok(Json(enhanced))
}

async fn provider_info(State(app): State<Arc<App>>) -> Json<ProviderInfoResponse> {
    Json(app.use_cases.llm.info.execute())
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    MethodNotAllowed,
    /// Upstream credentials are not configured.
    ServiceUnavailable(String),
    /// The upstream provider failed or could not be reached.
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
            ApiError::BadRequest(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::BadGateway(msg)
            | ApiError::Internal(msg) => msg,
        };
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<VideoError> for ApiError {
    fn from(e: VideoError) -> Self {
        match e {
            VideoError::Validation(_) | VideoError::Domain(_) => ApiError::BadRequest(e.to_string()),
            VideoError::Provider(ref provider) if provider.is_configuration() => {
                ApiError::ServiceUnavailable(e.to_string())
            }
            VideoError::Provider(_) => ApiError::BadGateway(e.to_string()),
            VideoError::Media(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<LlmUseCaseError> for ApiError {
    fn from(e: LlmUseCaseError) -> Self {
        match e {
            LlmUseCaseError::Validation(_) => ApiError::BadRequest(e.to_string()),
            LlmUseCaseError::Llm(ref llm) if llm.is_configuration() => {
                ApiError::ServiceUnavailable(e.to_string())
            }
            LlmUseCaseError::Llm(_) => ApiError::BadGateway(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use reelgate_domain::{LlmConfig, LlmProvider, VideoMetadata};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::infrastructure::ports::{
        LlmError, MockLlmPort, MockMediaProcessorPort, MockVideoGenPort, VideoGenError,
    };
    use crate::prompt_templates::PromptTemplates;

    fn router(
        video_gen: MockVideoGenPort,
        llm: MockLlmPort,
        media: MockMediaProcessorPort,
    ) -> Router {
        let app = App::new(
            Arc::new(video_gen),
            Arc::new(llm),
            Arc::new(media),
            PromptTemplates::default(),
        );
        routes().with_state(Arc::new(app))
    }

    fn idle_router() -> Router {
        router(
            MockVideoGenPort::new(),
            MockLlmPort::new(),
            MockMediaProcessorPort::new(),
        )
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn send_json(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send(router, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/api/video/generate")
            .header("origin", origin)
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap()
    }

    fn header_value(response: &axum::response::Response, name: &str) -> String {
        response
            .headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_ascii_lowercase())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn cors_is_open_to_any_origin_by_default() {
        let router = idle_router().layer(cors_layer("*").unwrap());
        let response = router.oneshot(preflight("https://ui.example")).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(header_value(&response, "access-control-allow-origin"), "*");
        let methods = header_value(&response, "access-control-allow-methods");
        for method in ["get", "post", "options"] {
            assert!(methods.contains(method), "methods: {methods}");
        }
        let headers = header_value(&response, "access-control-allow-headers");
        assert!(headers.contains("content-type"), "headers: {headers}");
        assert!(headers.contains("authorization"), "headers: {headers}");
    }

    #[tokio::test]
    async fn cors_origin_list_narrows_access() {
        let cors = cors_layer("https://a.example, https://b.example").unwrap();

        let allowed = idle_router()
            .layer(cors.clone())
            .oneshot(preflight("https://b.example"))
            .await
            .unwrap();
        assert_eq!(
            header_value(&allowed, "access-control-allow-origin"),
            "https://b.example"
        );

        let denied = idle_router()
            .layer(cors)
            .oneshot(preflight("https://evil.example"))
            .await
            .unwrap();
        assert!(denied.headers().get("access-control-allow-origin").is_none());
    }

    #[test]
    fn cors_without_valid_origins_is_disabled() {
        assert!(cors_layer(" , ").is_none());
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, body) = send(idle_router(), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn generate_requires_prompt_and_type() {
        let (status, body) = send_json(
            idle_router(),
            post_json("/api/video/generate", json!({"prompt": "a cat"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields: prompt, type"}));
    }

    #[tokio::test]
    async fn generate_rejects_unknown_type() {
        let (status, body) = send_json(
            idle_router(),
            post_json("/api/video/generate", json!({"prompt": "a cat", "type": "x2v"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unsupported video generation type: x2v");
    }

    #[tokio::test]
    async fn generate_relays_upstream_response() {
        let mut video_gen = MockVideoGenPort::new();
        video_gen
            .expect_submit()
            .times(1)
            .returning(|_| Ok(json!({"output": {"task_id": "t-1", "task_status": "PENDING"}})));

        let (status, body) = send_json(
            router(video_gen, MockLlmPort::new(), MockMediaProcessorPort::new()),
            post_json("/api/video/generate", json!({"prompt": "a cat", "type": "t2v"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"]["task_id"], "t-1");
    }

    #[tokio::test]
    async fn missing_video_key_is_service_unavailable() {
        let mut video_gen = MockVideoGenPort::new();
        video_gen
            .expect_submit()
            .returning(|_| Err(VideoGenError::MissingApiKey));

        let (status, body) = send_json(
            router(video_gen, MockLlmPort::new(), MockMediaProcessorPort::new()),
            post_json("/api/video/generate", json!({"prompt": "a cat", "type": "t2v"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "DASHSCOPE_API_KEY is not configured");
    }

    #[tokio::test]
    async fn status_requires_task_id() {
        let (status, body) = send_json(idle_router(), get("/api/video/status")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing taskId parameter");
    }

    #[tokio::test]
    async fn status_upstream_failure_is_bad_gateway() {
        let mut video_gen = MockVideoGenPort::new();
        video_gen
            .expect_task_status()
            .withf(|task_id| task_id == "t-1")
            .returning(|_| {
                Err(VideoGenError::PollFailed {
                    status: 404,
                    body: "not found".to_string(),
                })
            });

        let (status, body) = send_json(
            router(video_gen, MockLlmPort::new(), MockMediaProcessorPort::new()),
            get("/api/video/status?taskId=t-1"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Polling request failed: 404 not found");
    }

    #[tokio::test]
    async fn compliance_reports_simulated_metadata() {
        let mut media = MockMediaProcessorPort::new();
        media
            .expect_read_metadata()
            .returning(|_| Ok(VideoMetadata::simulated()));

        let (status, body) = send_json(
            router(MockVideoGenPort::new(), MockLlmPort::new(), media),
            post_json("/api/video/compliance", json!({"videoPath": "clip.mp4"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["compliant"].is_boolean());
        assert!(body["issues"].is_array());
    }

    #[tokio::test]
    async fn edit_requires_paths() {
        let (status, body) = send_json(
            idle_router(),
            post_json("/api/video/edit", json!({"inputPath": "in.mp4"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: inputPath, outputPath");
    }

    #[tokio::test]
    async fn wrong_method_is_rejected_with_json() {
        let (status, body) = send_json(idle_router(), get("/api/video/generate")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/llm/chat")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send_json(idle_router(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn unknown_api_path_returns_index() {
        let (status, body) = send_json(idle_router(), get("/api/nothing/here")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], API_NAME);
        assert_eq!(body["endpoints"].as_array().unwrap().len(), API_ENDPOINTS.len());
    }

    #[tokio::test]
    async fn unknown_path_is_empty_not_found() {
        let (status, body) = send(idle_router(), get("/favicon.ico")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn chat_without_llm_key_is_service_unavailable() {
        let mut llm = MockLlmPort::new();
        llm.expect_chat().returning(|_| {
            Err(LlmError::MissingApiKey(
                "Missing API key for deepseek. Expected environment variable: DEEPSEEK_API_KEY"
                    .to_string(),
            ))
        });

        let (status, body) = send_json(
            router(MockVideoGenPort::new(), llm, MockMediaProcessorPort::new()),
            post_json(
                "/api/llm/chat",
                json!({"messages": [{"role": "user", "content": "hi"}]}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body["error"],
            "Missing API key for deepseek. Expected environment variable: DEEPSEEK_API_KEY"
        );
    }

    #[tokio::test]
    async fn llm_upstream_error_is_bad_gateway() {
        let mut llm = MockLlmPort::new();
        llm.expect_chat().returning(|_| {
            Err(LlmError::Api {
                provider: "DeepSeek",
                status: 429,
                body: "rate limited".to_string(),
            })
        });

        let (status, body) = send_json(
            router(MockVideoGenPort::new(), llm, MockMediaProcessorPort::new()),
            post_json("/api/llm/enhance", json!({"prompt": "a cat"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "DeepSeek API error (429): rate limited");
    }

    #[tokio::test]
    async fn video_prompt_alias_routes_to_same_handler() {
        let mut llm = MockLlmPort::new();
        llm.expect_chat().times(2).returning(|_| {
            Ok(crate::use_cases::llm::test_support::completion(
                "A cat walks across a sunlit rooftop",
            ))
        });
        let router = router(MockVideoGenPort::new(), llm, MockMediaProcessorPort::new());

        for uri in ["/api/llm/VideoPrompt", "/api/llm/video-prompt"] {
            let (status, body) =
                send_json(router.clone(), post_json(uri, json!({"prompt": "cat"}))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["prompt"], "A cat walks across a sunlit rooftop");
        }
    }

    #[tokio::test]
    async fn provider_info_reports_status() {
        let mut llm = MockLlmPort::new();
        llm.expect_config()
            .returning(|| LlmConfig::for_provider(LlmProvider::OpenAi, Some("sk".to_string())));

        let (status, body) = send_json(
            router(MockVideoGenPort::new(), llm, MockMediaProcessorPort::new()),
            get("/api/llm/info"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "configured");
        assert_eq!(body["model"], "gpt-4");
    }
}
