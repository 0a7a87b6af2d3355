//! Gaslamp mystery engine API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use gaslamp_api::config::ApiConfig;
use gaslamp_api::routes;
use gaslamp_api::state::AppState;
use gaslamp_case_store::PgCaseRepository;
use gaslamp_core::clock::SystemClock;
use gaslamp_core::generator::ImageGenerator;
use gaslamp_generators::{
    ANALYTIC_PERSONA, AnthropicGenerator, FalImageGenerator, NARRATIVE_PERSONA, OpenAiGenerator,
    build_http_client,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Gaslamp mystery engine API server");

    let config = ApiConfig::from_env()?;

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    // Wire up the generator capabilities.
    let http_client = build_http_client()?;
    let narrative = Arc::new(OpenAiGenerator::new(
        http_client.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        NARRATIVE_PERSONA,
    ));
    let analytic = Arc::new(AnthropicGenerator::new(
        http_client.clone(),
        config.anthropic_api_key.clone(),
        config.anthropic_model.clone(),
        ANALYTIC_PERSONA,
    ));
    let illustrator: Option<Arc<dyn ImageGenerator>> = match &config.fal_key {
        Some(key) => Some(Arc::new(FalImageGenerator::new(
            http_client,
            key.clone(),
            &config.fal_model,
        ))),
        None => {
            tracing::warn!("FAL_KEY not set, scene illustration disabled");
            None
        }
    };

    // Build application state.
    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(PgCaseRepository::new(pool)),
        narrative,
        analytic,
        illustrator,
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = routes::app_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
