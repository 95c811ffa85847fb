//! Upload workflow API handlers
//!
//! The upload modal drives its session over these endpoints:
//! POST /api/upload/session, POST /api/upload/{id}/file,
//! GET /api/upload/{id}, POST /api/upload/{id}/submit,
//! DELETE /api/upload/{id}.

use axum::{
    extract::{Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};
use lumina_common::{Category, ImageMetadata, Photo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{UploadSession, UploadState};
use crate::services::upload_workflow;
use crate::AppState;

/// Session snapshot returned by every upload endpoint
#[derive(Debug, Serialize)]
pub struct UploadSessionResponse {
    pub session_id: Uuid,
    pub state: UploadState,
    pub generation: u64,
    /// Preview URL once a file is attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Pre-filled form fields once analysis completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}

impl From<&UploadSession> for UploadSessionResponse {
    fn from(session: &UploadSession) -> Self {
        Self {
            session_id: session.session_id,
            state: session.state,
            generation: session.generation,
            preview_url: session
                .image
                .as_ref()
                .map(|image| format!("/photos/{}", image.image_id)),
            metadata: session.metadata.clone(),
        }
    }
}

/// POST /api/upload/{id}/submit request
#[derive(Debug, Deserialize)]
pub struct SubmitUploadRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
}

/// POST /api/upload/{id}/submit response
#[derive(Debug, Serialize)]
pub struct SubmitUploadResponse {
    pub session_id: Uuid,
    pub state: UploadState,
    pub photo: Photo,
}

/// POST /api/upload/session
///
/// Open an upload session (the modal was opened).
pub async fn create_session(State(state): State<AppState>) -> Json<UploadSessionResponse> {
    let session = upload_workflow::create_session(&state).await;
    Json(UploadSessionResponse::from(&session))
}

/// POST /api/upload/{session_id}/file
///
/// Attach an image (multipart field "file"). The preview is available
/// immediately; analysis starts automatically.
pub async fn select_file(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadSessionResponse>> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().map(|name| name.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
            file = Some((bytes, filename));
            break;
        }
    }

    let (bytes, filename) =
        file.ok_or_else(|| ApiError::BadRequest("Missing multipart field: file".to_string()))?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
    }

    let session = upload_workflow::attach_file(&state, session_id, bytes, filename).await?;
    Ok(Json(UploadSessionResponse::from(&session)))
}

/// GET /api/upload/{session_id}
///
/// Poll session state; the pre-filled metadata appears once analysis
/// completes.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<UploadSessionResponse>> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown upload session: {}", session_id)))?;
    Ok(Json(UploadSessionResponse::from(session)))
}

/// POST /api/upload/{session_id}/submit
///
/// Publish the photo with the (possibly user-edited) form values. Rejected
/// when no file is attached or the session is not ready.
pub async fn submit_upload(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitUploadRequest>,
) -> ApiResult<Json<SubmitUploadResponse>> {
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::BadRequest("Title must not be empty".to_string()));
    }

    let photo = upload_workflow::publish(
        &state,
        session_id,
        title,
        request.description.trim().to_string(),
        request.category,
    )
    .await?;

    Ok(Json(SubmitUploadResponse {
        session_id,
        state: UploadState::Published,
        photo,
    }))
}

/// DELETE /api/upload/{session_id}
///
/// Dismiss the session (modal closed) from any non-terminal state.
pub async fn cancel_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<UploadSessionResponse>> {
    upload_workflow::cancel_session(&state, session_id).await?;

    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown upload session: {}", session_id)))?;
    Ok(Json(UploadSessionResponse::from(session)))
}

/// Build upload workflow routes
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload/session", post(create_session))
        .route("/api/upload/:session_id/file", post(select_file))
        .route(
            "/api/upload/:session_id",
            get(get_session).delete(cancel_session),
        )
        .route("/api/upload/:session_id/submit", post(submit_upload))
}
