//! Upload workflow state machine
//!
//! An upload session progresses through:
//! Idle → FileSelected → Analyzing → ReadyToSave → Saving → Published,
//! with Cancelled reachable from any non-terminal state (modal dismissal).
//!
//! Each file selection advances the session's generation counter. Analysis
//! completions carry the generation they were started with, and completions
//! whose generation no longer matches are discarded — re-selecting a file
//! while a prior analysis is in flight replaces it rather than racing it.

use chrono::{DateTime, Utc};
use lumina_common::ImageMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upload workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadState {
    /// Session open, no file attached yet
    Idle,
    /// File attached, preview available
    FileSelected,
    /// Metadata analysis in flight
    Analyzing,
    /// Form fields pre-filled, awaiting user submission
    ReadyToSave,
    /// Simulated save round-trip in progress
    Saving,
    /// Photo committed to the gallery
    Published,
    /// Session dismissed before publishing
    Cancelled,
}

impl UploadState {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadState::Published | UploadState::Cancelled)
    }
}

/// State transition record, emitted alongside every change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTransition {
    pub session_id: Uuid,
    pub old_state: UploadState,
    pub new_state: UploadState,
    pub transitioned_at: DateTime<Utc>,
}

/// The image currently attached to a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedImage {
    /// Key into the in-memory image store; preview at /photos/{image_id}
    pub image_id: Uuid,
    /// Sniffed media type of the stored bytes
    pub mime_type: String,
    /// Client-supplied filename, if any
    pub filename: Option<String>,
}

/// Upload session (in-memory state)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSession {
    /// Unique session identifier
    pub session_id: Uuid,

    /// Current workflow state
    pub state: UploadState,

    /// Analysis generation counter; bumped on every file selection
    pub generation: u64,

    /// Currently attached image, if a file has been selected
    pub image: Option<SelectedImage>,

    /// Analyzer output pre-filling the form (set on ReadyToSave)
    pub metadata: Option<ImageMetadata>,

    /// Session start time
    pub started_at: DateTime<Utc>,

    /// Session end time (if published/cancelled)
    pub ended_at: Option<DateTime<Utc>>,
}

impl UploadSession {
    /// Create a new session in the Idle state
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            state: UploadState::Idle,
            generation: 0,
            image: None,
            metadata: None,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Transition to a new state, recording the change
    pub fn transition_to(&mut self, new_state: UploadState) -> StateTransition {
        let transition = StateTransition {
            session_id: self.session_id,
            old_state: self.state,
            new_state,
            transitioned_at: Utc::now(),
        };
        self.state = new_state;
        if new_state.is_terminal() {
            self.ended_at = Some(transition.transitioned_at);
        }
        transition
    }

    /// Advance the generation counter for a new file selection
    ///
    /// Returns the new generation. Any analysis started under an earlier
    /// generation is now stale.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_idle() {
        let session = UploadSession::new();
        assert_eq!(session.state, UploadState::Idle);
        assert_eq!(session.generation, 0);
        assert!(session.image.is_none());
        assert!(session.metadata.is_none());
        assert!(session.ended_at.is_none());
    }

    #[test]
    fn transition_records_old_and_new_state() {
        let mut session = UploadSession::new();
        let transition = session.transition_to(UploadState::FileSelected);
        assert_eq!(transition.old_state, UploadState::Idle);
        assert_eq!(transition.new_state, UploadState::FileSelected);
        assert_eq!(session.state, UploadState::FileSelected);
        assert!(session.ended_at.is_none());
    }

    #[test]
    fn terminal_transition_sets_ended_at() {
        let mut session = UploadSession::new();
        session.transition_to(UploadState::Cancelled);
        assert!(session.ended_at.is_some());
        assert!(session.state.is_terminal());
    }

    #[test]
    fn generation_advances_monotonically() {
        let mut session = UploadSession::new();
        assert_eq!(session.next_generation(), 1);
        assert_eq!(session.next_generation(), 2);
        assert_eq!(session.generation, 2);
    }

    #[test]
    fn only_published_and_cancelled_are_terminal() {
        assert!(!UploadState::Idle.is_terminal());
        assert!(!UploadState::FileSelected.is_terminal());
        assert!(!UploadState::Analyzing.is_terminal());
        assert!(!UploadState::ReadyToSave.is_terminal());
        assert!(!UploadState::Saving.is_terminal());
        assert!(UploadState::Published.is_terminal());
        assert!(UploadState::Cancelled.is_terminal());
    }
}
