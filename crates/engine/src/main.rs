//! Reelgate Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelgate_engine::config::GatewayConfig;
use reelgate_engine::infrastructure::{
    dashscope::DashScopeClient, llm_client::OpenAiCompatibleClient,
    media::SimulatedMediaProcessor,
};
use reelgate_engine::prompt_templates::PromptTemplates;
use reelgate_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelgate_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Reelgate Engine");

    let config = GatewayConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let video_gen = DashScopeClient::with_timeout(
        &config.dashscope_base_url,
        config.dashscope_api_key.clone(),
        config.video_request_timeout_secs,
    );
    if !video_gen.is_configured() {
        tracing::warn!("DASHSCOPE_API_KEY is not set, video generation requests will fail");
    }

    if !config.llm.is_configured() {
        tracing::warn!(
            provider = %config.llm.provider,
            "{}",
            config.llm.missing_key_message()
        );
    }
    tracing::info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        "LLM client configured"
    );
    let llm = OpenAiCompatibleClient::new(config.llm.clone());

    let media = SimulatedMediaProcessor::new(Duration::from_millis(config.video_edit_delay_ms));

    // Create application
    let app = Arc::new(App::new(
        Arc::new(video_gen),
        Arc::new(llm),
        Arc::new(media),
        PromptTemplates::from_env(),
    ));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = api::http::cors_layer(&config.cors_allowed_origins) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
