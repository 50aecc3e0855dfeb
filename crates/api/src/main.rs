use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copyforge_api::config::ServerConfig;
use copyforge_api::router::build_app_router;
use copyforge_api::state::{AppState, ServiceHandles};
use copyforge_services::ServiceEndpoints;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "copyforge_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let endpoints = ServiceEndpoints::from_env();
    tracing::info!(
        strategy = %endpoints.content_strategy_url,
        contents = %endpoints.create_contents_url,
        "Loaded service endpoints"
    );

    // --- App state ---
    let services = ServiceHandles::from_endpoints(&endpoints);
    let state = AppState::new(config.clone(), services);

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid host/port configuration");

    tracing::info!(%addr, "Starting copyforge API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
