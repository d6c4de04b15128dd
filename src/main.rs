mod app;
mod config;
mod response;
mod state;
mod users;

use crate::app::{build_app, serve};
use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "user_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let app = build_app(AppState::new());

    tracing::info!("POST   /users      - add a new user");
    tracing::info!("GET    /users      - list users (optional ?name= filter)");
    tracing::info!("GET    /users/:id  - get user by id");
    tracing::info!("GET    /health     - health check");

    serve(app, &config).await
}
