//! In-memory image byte store
//!
//! Holds the raw bytes of uploaded images for the lifetime of the process,
//! keyed by UUID and served at /photos/{id}. Bytes for sessions that are
//! dismissed before publishing are released.

use axum::body::Bytes;
use std::collections::HashMap;
use uuid::Uuid;

/// Accepted upload media types
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// One stored image
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Sniffed media type
    pub mime_type: String,
    /// Raw image bytes
    pub bytes: Bytes,
}

/// UUID-keyed image byte store
#[derive(Debug, Default)]
pub struct ImageStore {
    entries: HashMap<Uuid, StoredImage>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store image bytes, returning the new key
    pub fn insert(&mut self, mime_type: String, bytes: Bytes) -> Uuid {
        let image_id = Uuid::new_v4();
        self.entries.insert(image_id, StoredImage { mime_type, bytes });
        image_id
    }

    pub fn get(&self, image_id: &Uuid) -> Option<&StoredImage> {
        self.entries.get(image_id)
    }

    /// Release stored bytes (dismissed session cleanup)
    pub fn remove(&mut self, image_id: &Uuid) -> Option<StoredImage> {
        self.entries.remove(image_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sniff the media type of uploaded bytes
///
/// Returns the mime string only for the accepted image types
/// (JPEG/PNG/WebP); anything else — including other image formats — is
/// rejected by returning None.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    let kind = infer::get(bytes)?;
    ACCEPTED_MIME_TYPES
        .iter()
        .find(|accepted| **accepted == kind.mime_type())
        .copied()
}
