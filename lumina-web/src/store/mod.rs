//! In-memory state stores for lumina-web
//!
//! There is no durable storage: the gallery and the uploaded image bytes
//! live for the lifetime of the process.

pub mod gallery;
pub mod images;

pub use gallery::GalleryStore;
pub use images::{ImageStore, StoredImage};
