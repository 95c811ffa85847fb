//! UI Routes - HTML pages for the Lumina portfolio
//!
//! Web UI with HTML/CSS/JS (vanilla ES6+, no frameworks):
//!
//! - **Gallery** (`gallery`): filterable photo grid with lightbox and the
//!   upload modal
//! - **Contact** (`contact_page`): contact form with simulated delivery
//! - **Static Assets** (`static_assets`): CSS/JS file serving

use crate::AppState;
use axum::{routing::get, Router};

// Module declarations
mod contact_page;
mod gallery;
mod static_assets;

// Re-export handler functions for router assembly
use contact_page::contact_page;
use gallery::gallery_page;
use static_assets::{serve_contact_js, serve_lumina_sse_js, serve_portfolio_css, serve_portfolio_js};

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(gallery_page))
        .route("/contact", get(contact_page))
        // Static assets
        .route("/static/lumina-sse.js", get(serve_lumina_sse_js))
        .route("/static/portfolio.css", get(serve_portfolio_css))
        .route("/static/portfolio.js", get(serve_portfolio_js))
        .route("/static/contact.js", get(serve_contact_js))
}
