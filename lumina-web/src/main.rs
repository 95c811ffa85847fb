//! lumina-web - Photo Portfolio Service
//!
//! Serves the Lumina gallery web UI and its API: filterable photo gallery,
//! lightbox, contact form, and the upload workflow with AI-generated
//! metadata. All state is in-memory for the lifetime of the process.

use anyhow::Result;
use lumina_common::config::{load_toml_config, ServiceConfig};
use lumina_common::events::EventBus;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lumina_web::services::Analyzer;
use lumina_web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let toml_config = load_toml_config();
    let config = ServiceConfig::from_toml(&toml_config);

    // Initialize tracing
    let level = config.log_level.parse::<Level>().unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level {:?}, falling back to info",
            config.log_level
        );
        Level::INFO
    });
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting lumina-web (Photo Portfolio) service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "Build: {} {} ({})",
        env!("GIT_HASH"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TIMESTAMP")
    );

    // Analyzer credential: absence degrades to fallback metadata, never fatal
    let api_key = lumina_web::config::resolve_gemini_api_key(&toml_config);
    let analyzer = Analyzer::new(api_key);

    // Event bus for SSE broadcasting
    let event_bus = EventBus::new(100);
    info!("Event bus initialized");

    // Application state, gallery seeded with the starter collection
    let state = AppState::new(analyzer, event_bus);
    info!(
        "Gallery seeded with {} photos",
        state.gallery.read().await.len()
    );

    // Build router
    let app = lumina_web::build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("Listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
