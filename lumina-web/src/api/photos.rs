//! Gallery API handlers
//!
//! GET /api/photos lists published photos, optionally filtered by category;
//! GET /photos/{id} serves uploaded image bytes from the in-memory store.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use lumina_common::{CategoryFilter, Photo};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/photos query parameters
#[derive(Debug, Deserialize)]
pub struct PhotosQuery {
    /// "All" (default) or one of the four category names
    pub category: Option<String>,
}

/// GET /api/photos
///
/// Photos newest-first, filtered by category when requested. An unknown
/// category string is a 400, not an empty result.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(query): Query<PhotosQuery>,
) -> ApiResult<Json<Vec<Photo>>> {
    let filter = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw.parse::<CategoryFilter>()?,
    };

    let photos = state.gallery.read().await.filter(filter);
    Ok(Json(photos))
}

/// GET /photos/{image_id}
///
/// Serves stored image bytes with their sniffed content type.
pub async fn serve_image(
    State(state): State<AppState>,
    Path(image_id): Path<Uuid>,
) -> ApiResult<Response> {
    let images = state.images.read().await;
    let stored = images
        .get(&image_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown image: {}", image_id)))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, stored.mime_type.clone()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        stored.bytes.clone(),
    )
        .into_response())
}

/// Build gallery routes
pub fn photo_routes() -> Router<AppState> {
    Router::new()
        .route("/api/photos", get(list_photos))
        .route("/photos/:image_id", get(serve_image))
}
