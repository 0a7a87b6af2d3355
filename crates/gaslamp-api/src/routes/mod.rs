//! Route modules organized by bounded context.

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub mod authoring;
pub mod deduction;
pub mod health;
pub mod interrogation;
pub mod scenes;

/// Assembles every route into one router: the banner at the root, the game
/// endpoints under `/api`. Layers and state are the caller's concern.
pub fn app_router() -> Router<AppState> {
    Router::new().route("/", get(health::banner)).nest(
        "/api",
        health::router()
            .merge(authoring::router())
            .merge(interrogation::router())
            .merge(deduction::router())
            .merge(scenes::router()),
    )
}
