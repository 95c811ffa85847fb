//! Event types for the Lumina event system
//!
//! Provides shared event definitions and EventBus for the Lumina service.
//! Events are broadcast via EventBus and can be serialized for SSE
//! transmission to connected gallery pages.

use crate::types::{Category, ContactSubject, ImageMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Lumina event types
///
/// All events use this central enum for type safety and exhaustive matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LuminaEvent {
    /// Upload session created (the upload modal was opened)
    ///
    /// Triggers:
    /// - SSE: session id handed to the modal for subsequent calls
    UploadSessionStarted {
        /// Session UUID
        session_id: Uuid,
        /// When the session was created
        timestamp: DateTime<Utc>,
    },

    /// A file was attached to an upload session
    ///
    /// Fires on every selection, including re-selection while a prior
    /// analysis is still in flight (the prior generation is cancelled).
    ///
    /// Triggers:
    /// - SSE: show the preview image
    FileSelected {
        /// Session UUID
        session_id: Uuid,
        /// Stored image UUID (preview served at /photos/{image_id})
        image_id: Uuid,
        /// Sniffed media type of the uploaded bytes
        mime_type: String,
        /// Analysis generation this selection begins
        generation: u64,
        /// When the file was selected
        timestamp: DateTime<Utc>,
    },

    /// Metadata analysis started for a selection
    ///
    /// Triggers:
    /// - SSE: show the "analyzing" overlay
    AnalysisStarted {
        /// Session UUID
        session_id: Uuid,
        /// Generation this analysis belongs to
        generation: u64,
        /// When analysis started
        timestamp: DateTime<Utc>,
    },

    /// Metadata analysis finished and was applied to the session
    ///
    /// Triggers:
    /// - SSE: pre-fill the title/description/category form fields
    AnalysisCompleted {
        /// Session UUID
        session_id: Uuid,
        /// Generation this analysis belongs to
        generation: u64,
        /// Metadata now pre-filling the form (fallback values on failure)
        metadata: ImageMetadata,
        /// True when the analyzer degraded to fallback metadata
        degraded: bool,
        /// When analysis completed
        timestamp: DateTime<Utc>,
    },

    /// An analysis completion was discarded without touching session state
    ///
    /// Happens when the session was cancelled, re-selected (generation
    /// mismatch), or already past the analyzing state.
    AnalysisDiscarded {
        /// Session UUID
        session_id: Uuid,
        /// Generation of the stale completion
        generation: u64,
        /// When the completion was discarded
        timestamp: DateTime<Utc>,
    },

    /// A photo was committed to the gallery
    ///
    /// Triggers:
    /// - SSE: prepend the new photo to the gallery grid
    PhotoPublished {
        /// Published photo UUID
        photo_id: Uuid,
        /// Session that produced the photo
        session_id: Uuid,
        /// Category the photo was published under
        category: Category,
        /// When the photo was published
        timestamp: DateTime<Utc>,
    },

    /// Upload session dismissed before publishing
    ///
    /// Any in-flight analysis is cancelled; unpublished image bytes are
    /// released.
    UploadSessionCancelled {
        /// Session UUID
        session_id: Uuid,
        /// When the session was cancelled
        timestamp: DateTime<Utc>,
    },

    /// Contact form submission accepted
    ContactSubmitted {
        /// Selected subject
        subject: ContactSubject,
        /// When the submission was accepted
        timestamp: DateTime<Utc>,
    },
}

impl LuminaEvent {
    /// Event type name for SSE event tagging
    pub fn event_type(&self) -> &'static str {
        match self {
            LuminaEvent::UploadSessionStarted { .. } => "UploadSessionStarted",
            LuminaEvent::FileSelected { .. } => "FileSelected",
            LuminaEvent::AnalysisStarted { .. } => "AnalysisStarted",
            LuminaEvent::AnalysisCompleted { .. } => "AnalysisCompleted",
            LuminaEvent::AnalysisDiscarded { .. } => "AnalysisDiscarded",
            LuminaEvent::PhotoPublished { .. } => "PhotoPublished",
            LuminaEvent::UploadSessionCancelled { .. } => "UploadSessionCancelled",
            LuminaEvent::ContactSubmitted { .. } => "ContactSubmitted",
        }
    }
}

// ========================================
// EventBus Implementation
// ========================================

/// Central event distribution bus for application-wide events
///
/// The EventBus uses tokio::broadcast internally, providing:
/// - Non-blocking publish (slow subscribers don't block producers)
/// - Multiple concurrent subscribers
/// - Automatic cleanup when subscribers drop
/// - Lagged message detection for slow subscribers
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<LuminaEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with specified channel capacity
    ///
    /// `capacity` is the number of events buffered before old events are
    /// dropped for lagging subscribers.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Returns a receiver that will receive all events emitted after
    /// subscription. Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<LuminaEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists.
    /// Returns `Err` if no subscribers are listening.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: LuminaEvent,
    ) -> Result<usize, broadcast::error::SendError<LuminaEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    ///
    /// Used for events where it is acceptable if no gallery page is
    /// currently connected.
    pub fn emit_lossy(&self, event: LuminaEvent) {
        let _ = self.tx.send(event);
    }

    /// Get the current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Get the configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn event_type_names_match_variants() {
        let event = LuminaEvent::PhotoPublished {
            photo_id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            category: Category::Landscapes,
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type(), "PhotoPublished");
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = LuminaEvent::UploadSessionCancelled {
            session_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"UploadSessionCancelled\""));
    }

    #[tokio::test]
    async fn bus_delivers_to_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.capacity(), 16);
        let mut rx = bus.subscribe();

        bus.emit(LuminaEvent::UploadSessionStarted {
            session_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        })
        .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.event_type(), "UploadSessionStarted");
    }

    #[test]
    fn emit_without_subscribers_errors_but_lossy_does_not_panic() {
        let bus = EventBus::new(16);
        let event = LuminaEvent::UploadSessionStarted {
            session_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };
        assert!(bus.emit(event.clone()).is_err());
        bus.emit_lossy(event);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
