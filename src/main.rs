//! Studyroom - A state-managed HTTP server for collaborative study sessions
//!
//! This is the main entry point for the studyroom application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use studyroom::{
    api::create_router, config::Config, state::AppState, tasks::timer_tick_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("studyroom={},tower_http=info", config.log_level()))
        .init();

    info!("Starting studyroom server v1.0.0");
    info!(
        "Configuration: host={}, port={}, chunk={}min",
        config.host,
        config.port,
        config.chunk_seconds() / 60
    );

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.chunk_seconds(),
    ));

    // Start the one-second timer tick background task
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        timer_tick_task(tick_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /rooms                     - Create a study room");
    info!("  GET  /rooms                     - List public rooms");
    info!("  POST /rooms/:id/join            - Join a room");
    info!("  POST /rooms/:id/timer/configure - Configure the room timer");
    info!("  POST /rooms/:id/timer/start     - Start the room timer");
    info!("  GET  /sessions                  - Recorded study sessions");
    info!("  GET  /analytics/summary         - Study summary and streak");
    info!("  GET  /status                    - Check current status");
    info!("  GET  /health                    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
