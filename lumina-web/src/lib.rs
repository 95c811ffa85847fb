//! lumina-web library interface
//!
//! Exposes the application state and router for integration testing.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use crate::error::{ApiError, ApiResult};

use crate::models::UploadSession;
use crate::services::Analyzer;
use crate::store::{GalleryStore, ImageStore};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use chrono::{DateTime, Utc};
use lumina_common::events::EventBus;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Request body cap; bounds memory, distinct from the advisory UI label
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Published photos, newest first; written only by the publish step
    pub gallery: Arc<RwLock<GalleryStore>>,
    /// Uploaded image bytes, served at /photos/{id}
    pub images: Arc<RwLock<ImageStore>>,
    /// Active and recently finished upload sessions
    pub sessions: Arc<RwLock<HashMap<Uuid, UploadSession>>>,
    /// Cancellation tokens for in-flight analyses, keyed by session
    pub cancellation_tokens: Arc<RwLock<HashMap<Uuid, CancellationToken>>>,
    /// Metadata analyzer (degrades to fallback metadata without a key)
    pub analyzer: Arc<Analyzer>,
    /// Event bus for SSE broadcasting
    pub event_bus: EventBus,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last degradation/error cause for diagnostic purposes
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    /// Build state with the seeded starter gallery
    pub fn new(analyzer: Analyzer, event_bus: EventBus) -> Self {
        Self {
            gallery: Arc::new(RwLock::new(GalleryStore::with_seed_photos())),
            images: Arc::new(RwLock::new(ImageStore::new())),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            cancellation_tokens: Arc::new(RwLock::new(HashMap::new())),
            analyzer: Arc::new(analyzer),
            event_bus,
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Build state with an empty gallery (tests)
    pub fn with_empty_gallery(analyzer: Analyzer, event_bus: EventBus) -> Self {
        let state = Self::new(analyzer, event_bus);
        Self {
            gallery: Arc::new(RwLock::new(GalleryStore::new())),
            ..state
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        // UI routes (HTML pages)
        .merge(api::ui_routes())
        // API routes
        .merge(api::photo_routes())
        .merge(api::upload_routes())
        .merge(api::contact_routes())
        .merge(api::health_routes())
        .route("/events", get(api::event_stream))
        .route("/api/events", get(api::portfolio_event_stream))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
