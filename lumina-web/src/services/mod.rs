//! Service layer for lumina-web
//!
//! - `analyzer`: Gemini metadata analyzer with graceful degradation
//! - `upload_workflow`: upload session orchestration (select → analyze →
//!   publish, with cancel-and-replace semantics)
//! - `contact`: contact form validation and simulated delivery

pub mod analyzer;
pub mod contact;
pub mod upload_workflow;

pub use analyzer::{Analyzer, AnalyzerError};
