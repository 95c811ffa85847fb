//! Contact form API handler
//!
//! POST /api/contact validates the four fields and runs the simulated
//! delivery round-trip. Validation failures are 400s with field detail;
//! the UI surfaces delivery failures as a generic banner and keeps the
//! form for retry.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::services::contact;
use crate::AppState;

/// POST /api/contact request
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// POST /api/contact response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: String,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    let submission = contact::validate_submission(
        &request.name,
        &request.email,
        &request.subject,
        &request.message,
    )?;

    contact::deliver(&state, submission).await;

    Ok(Json(ContactResponse {
        status: "sent".to_string(),
    }))
}

/// Build contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}
