//! Data models for lumina-web

mod upload_session;

pub use upload_session::{SelectedImage, StateTransition, UploadSession, UploadState};
