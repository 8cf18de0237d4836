use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use server::clients::{line::LineClient, puzzle::PuzzleClient};
use server::config::Config;
use server::sessions::Sessions;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let line_client = LineClient::new(&config.channel_token);
    let puzzle_client = PuzzleClient::new(&config.puzzle_api_url);
    let sessions = Arc::new(Sessions::new());

    let addr = format!("{}:{}", config.host, config.port);
    let app = server::app(config, line_client, puzzle_client, sessions);

    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
