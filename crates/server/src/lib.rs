pub mod clients;
pub mod config;
pub mod error;
pub mod line;
pub mod routes;
pub mod sessions;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use clients::{line::LineClient, puzzle::PuzzleClient};
use config::Config;
use sessions::Sessions;

/// Build the application router with its shared state attached.
/// Kept out of `main` so integration tests can drive the router directly.
pub fn app(
    config: Config,
    line_client: LineClient,
    puzzle_client: PuzzleClient,
    sessions: Arc<Sessions>,
) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/callback", post(routes::webhook::callback))
        .layer(Extension(config))
        .layer(Extension(line_client))
        .layer(Extension(puzzle_client))
        .layer(Extension(sessions))
}
