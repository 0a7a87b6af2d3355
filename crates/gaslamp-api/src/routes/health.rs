//! Banner and health endpoints.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Banner response at the root path.
#[derive(Serialize)]
pub struct BannerResponse {
    /// Service banner.
    pub message: String,
    /// Service status.
    pub status: String,
}

/// Per-provider configuration status.
#[derive(Serialize)]
pub struct AiServices {
    /// Narrative text provider.
    pub narrative: &'static str,
    /// Analytic text provider.
    pub analytic: &'static str,
    /// Image provider; `disabled` when no key was configured.
    pub illustrator: &'static str,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Which generator capabilities this deployment carries.
    pub ai_services: AiServices,
}

/// GET /
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Gaslamp mystery engine API".to_string(),
        status: "running".to_string(),
    })
}

/// GET /api/health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ai_services: AiServices {
            narrative: "configured",
            analytic: "configured",
            illustrator: if state.illustrator.is_some() {
                "configured"
            } else {
                "disabled"
            },
        },
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
