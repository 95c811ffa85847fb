//! Upload workflow orchestration
//!
//! Coordinates the upload session state machine:
//!
//! - `attach_file` stores the bytes, cancels any in-flight analysis for the
//!   session (cancel-and-replace), advances the generation counter, and
//!   spawns a fresh analysis task.
//! - `apply_analysis` is the single point where analyzer output reaches
//!   session state; stale completions (generation mismatch, cancelled or
//!   advanced session) are discarded there.
//! - `publish` performs the simulated save round-trip and is the only
//!   writer of the gallery store.
//! - `cancel_session` implements modal dismissal from any non-terminal
//!   state, releasing unpublished image bytes.

use crate::error::{ApiError, ApiResult};
use crate::models::{SelectedImage, UploadSession, UploadState};
use crate::services::analyzer::AnalysisOutcome;
use crate::store::images::sniff_image_mime;
use crate::AppState;
use axum::body::Bytes;
use chrono::Utc;
use lumina_common::events::LuminaEvent;
use lumina_common::{Category, Photo};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Simulated save round-trip latency
pub const SAVE_DELAY: Duration = Duration::from_millis(800);

/// Create a new upload session (the modal was opened)
pub async fn create_session(state: &AppState) -> UploadSession {
    let session = UploadSession::new();

    state.sessions.write().await.insert(session.session_id, session.clone());
    state.event_bus.emit_lossy(LuminaEvent::UploadSessionStarted {
        session_id: session.session_id,
        timestamp: Utc::now(),
    });

    info!(session_id = %session.session_id, "Upload session started");
    session
}

/// Attach a file to a session and start analysis
///
/// Allowed from Idle, FileSelected, Analyzing, and ReadyToSave; selecting a
/// new file replaces the previous one and cancels interest in its analysis.
/// Returns the updated session snapshot.
pub async fn attach_file(
    state: &AppState,
    session_id: Uuid,
    bytes: Bytes,
    filename: Option<String>,
) -> ApiResult<UploadSession> {
    let mime_type = sniff_image_mime(&bytes).ok_or_else(|| {
        ApiError::BadRequest("Unsupported image type: JPEG, PNG, or WebP required".to_string())
    })?;

    let (snapshot, generation, token) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| ApiError::NotFound(format!("Unknown upload session: {}", session_id)))?;

        match session.state {
            UploadState::Saving => {
                return Err(ApiError::Conflict(
                    "Cannot change the file while the save is in progress".to_string(),
                ))
            }
            state if state.is_terminal() => {
                return Err(ApiError::Conflict(format!(
                    "Upload session already closed ({:?})",
                    state
                )))
            }
            _ => {}
        }

        // Cancel interest in any in-flight analysis for the prior selection
        if let Some(prior_token) = state.cancellation_tokens.write().await.remove(&session_id) {
            debug!(session_id = %session_id, "Cancelling prior analysis (file re-selected)");
            prior_token.cancel();
        }

        // Release the previous unpublished selection, if any
        if let Some(prior) = session.image.take() {
            state.images.write().await.remove(&prior.image_id);
        }

        let image_id = state
            .images
            .write()
            .await
            .insert(mime_type.to_string(), bytes.clone());

        session.image = Some(SelectedImage {
            image_id,
            mime_type: mime_type.to_string(),
            filename,
        });
        session.metadata = None;
        let generation = session.next_generation();

        session.transition_to(UploadState::FileSelected);
        state.event_bus.emit_lossy(LuminaEvent::FileSelected {
            session_id,
            image_id,
            mime_type: mime_type.to_string(),
            generation,
            timestamp: Utc::now(),
        });

        // Analysis begins automatically and immediately on selection
        session.transition_to(UploadState::Analyzing);
        state.event_bus.emit_lossy(LuminaEvent::AnalysisStarted {
            session_id,
            generation,
            timestamp: Utc::now(),
        });

        let token = CancellationToken::new();
        state
            .cancellation_tokens
            .write()
            .await
            .insert(session_id, token.clone());

        (session.clone(), generation, token)
    };

    info!(
        session_id = %session_id,
        generation,
        mime_type,
        "File selected, analysis started"
    );

    spawn_analysis(state.clone(), session_id, generation, bytes, mime_type.to_string(), token);

    Ok(snapshot)
}

/// Spawn the background analysis task for one selection
fn spawn_analysis(
    state: AppState,
    session_id: Uuid,
    generation: u64,
    bytes: Bytes,
    mime_type: String,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(session_id = %session_id, generation, "Analysis cancelled before completion");
            }
            outcome = state.analyzer.analyze(&bytes, &mime_type) => {
                apply_analysis(&state, session_id, generation, outcome).await;
            }
        }
    });
}

/// Apply an analysis completion to its session
///
/// The completion is dropped unless the session still exists, is still
/// Analyzing, and the generation matches the one the analysis was started
/// with. This is what makes re-selection cancel-and-replace instead of a
/// race.
pub async fn apply_analysis(
    state: &AppState,
    session_id: Uuid,
    generation: u64,
    outcome: AnalysisOutcome,
) {
    let mut sessions = state.sessions.write().await;

    match sessions.get_mut(&session_id) {
        Some(session)
            if session.state == UploadState::Analyzing && session.generation == generation =>
        {
            if let Some(cause) = &outcome.degraded {
                warn!(session_id = %session_id, cause = %cause, "Analysis degraded to fallback metadata");
                *state.last_error.write().await = Some(cause.clone());
            }

            session.metadata = Some(outcome.metadata.clone());
            session.transition_to(UploadState::ReadyToSave);

            state.event_bus.emit_lossy(LuminaEvent::AnalysisCompleted {
                session_id,
                generation,
                metadata: outcome.metadata,
                degraded: outcome.degraded.is_some(),
                timestamp: Utc::now(),
            });

            info!(session_id = %session_id, generation, "Analysis applied, session ready to save");
        }
        _ => {
            debug!(
                session_id = %session_id,
                generation,
                "Discarding stale analysis completion"
            );
            state.event_bus.emit_lossy(LuminaEvent::AnalysisDiscarded {
                session_id,
                generation,
                timestamp: Utc::now(),
            });
        }
    }
}

/// Publish a session's photo to the gallery
///
/// Rejected unless the session holds a file and is ReadyToSave. The
/// simulated save delay runs without holding any lock; the session state is
/// re-checked afterwards so a dismissal during the delay wins.
pub async fn publish(
    state: &AppState,
    session_id: Uuid,
    title: String,
    description: String,
    category: Category,
) -> ApiResult<Photo> {
    {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| ApiError::NotFound(format!("Unknown upload session: {}", session_id)))?;

        if session.image.is_none() {
            return Err(ApiError::Conflict(
                "No file attached to this upload session".to_string(),
            ));
        }
        if session.state != UploadState::ReadyToSave {
            return Err(ApiError::Conflict(format!(
                "Session is not ready to save ({:?})",
                session.state
            )));
        }

        session.transition_to(UploadState::Saving);
    }

    // Simulated save round-trip; no real persistence happens
    tokio::time::sleep(SAVE_DELAY).await;

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown upload session: {}", session_id)))?;

    if session.state != UploadState::Saving {
        return Err(ApiError::Conflict(
            "Upload session was dismissed during the save".to_string(),
        ));
    }

    let image = session
        .image
        .clone()
        .ok_or_else(|| ApiError::Internal("Saving session lost its image".to_string()))?;

    let photo = Photo {
        id: Uuid::new_v4(),
        url: format!("/photos/{}", image.image_id),
        title,
        description,
        category,
        date_added: Utc::now(),
    };

    state.gallery.write().await.insert(photo.clone());
    session.transition_to(UploadState::Published);

    state.event_bus.emit_lossy(LuminaEvent::PhotoPublished {
        photo_id: photo.id,
        session_id,
        category,
        timestamp: Utc::now(),
    });

    info!(
        session_id = %session_id,
        photo_id = %photo.id,
        category = %category,
        "Photo published to gallery"
    );

    Ok(photo)
}

/// Dismiss a session from any non-terminal state
///
/// Cancels any in-flight analysis and releases unpublished image bytes.
pub async fn cancel_session(state: &AppState, session_id: Uuid) -> ApiResult<()> {
    // Lock order is sessions → tokens → images, same as attach_file
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown upload session: {}", session_id)))?;

    if session.state.is_terminal() {
        return Err(ApiError::Conflict(format!(
            "Upload session already closed ({:?})",
            session.state
        )));
    }

    if let Some(token) = state.cancellation_tokens.write().await.remove(&session_id) {
        token.cancel();
    }

    if let Some(image) = session.image.take() {
        state.images.write().await.remove(&image.image_id);
    }
    session.metadata = None;
    session.transition_to(UploadState::Cancelled);

    state.event_bus.emit_lossy(LuminaEvent::UploadSessionCancelled {
        session_id,
        timestamp: Utc::now(),
    });

    info!(session_id = %session_id, "Upload session cancelled");
    Ok(())
}
