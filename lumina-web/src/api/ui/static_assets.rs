//! Static asset handlers for the Lumina UI
//!
//! Embeds and serves CSS/JS files at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

// Embed static files at compile time
const LUMINA_SSE_JS: &str = include_str!("../../../../lumina-common/static/lumina-sse.js");
const PORTFOLIO_CSS: &str = include_str!("../../../static/portfolio.css");
const PORTFOLIO_JS: &str = include_str!("../../../static/portfolio.js");
const CONTACT_JS: &str = include_str!("../../../static/contact.js");

/// GET /static/lumina-sse.js
///
/// Serves the shared Lumina SSE utility from lumina-common
pub async fn serve_lumina_sse_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        LUMINA_SSE_JS,
    )
        .into_response()
}

/// GET /static/portfolio.css
pub async fn serve_portfolio_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        PORTFOLIO_CSS,
    )
        .into_response()
}

/// GET /static/portfolio.js
pub async fn serve_portfolio_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        PORTFOLIO_JS,
    )
        .into_response()
}

/// GET /static/contact.js
pub async fn serve_contact_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        CONTACT_JS,
    )
        .into_response()
}
