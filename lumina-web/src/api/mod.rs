//! HTTP API handlers for lumina-web

pub mod contact;
pub mod health;
pub mod photos;
pub mod sse;
pub mod ui;
pub mod upload;

pub use contact::contact_routes;
pub use health::health_routes;
pub use photos::photo_routes;
pub use sse::{event_stream, portfolio_event_stream};
pub use ui::ui_routes;
pub use upload::upload_routes;
