//! Gallery page handler - portfolio landing page

use axum::response::{Html, IntoResponse};
use lumina_common::Category;

/// GET /
///
/// Portfolio gallery with category filter, lightbox, and the upload modal.
pub async fn gallery_page() -> impl IntoResponse {
    let build_timestamp = env!("BUILD_TIMESTAMP");
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = env!("GIT_HASH");
    let build_profile = env!("BUILD_PROFILE");

    let filter_buttons: String = std::iter::once("All".to_string())
        .chain(Category::ALL.iter().map(|c| c.as_str().to_string()))
        .map(|name| {
            format!(
                r#"<button class="filter-btn{}" data-category="{name}">{name}</button>"#,
                if name == "All" { " active" } else { "" },
            )
        })
        .collect();

    let category_options: String = Category::ALL
        .iter()
        .map(|category| {
            format!(
                r#"<option value="{value}" data-hint="{hint}">{value}</option>"#,
                value = category.as_str(),
                hint = category.hint(),
            )
        })
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Lumina Photography Portfolio</title>
    <link rel="stylesheet" href="/static/portfolio.css">
</head>
<body>
    <header>
        <div class="header-content">
            <div class="header-left">
                <h1>Lumina</h1>
                <nav>
                    <a href="/" class="active">Gallery</a>
                    <a href="/contact">Contact</a>
                </nav>
            </div>
            <div class="header-right">
                <button id="upload-button" class="btn btn-primary">Upload Photo</button>
                <span id="connection-status" class="status-dot" title="Connecting..."></span>
            </div>
        </div>
    </header>

    <main class="container">
        <section class="intro">
            <h2>Visual Stories</h2>
            <p>A curated collection of moments frozen in time. Explore portraits,
               landscapes, and abstract compositions captured through my lens.</p>
        </section>

        <div class="filter-bar">{filter_buttons}</div>

        <div id="gallery-grid" class="gallery-grid"></div>
        <p id="gallery-empty" class="gallery-empty hidden">No photos in this category yet.</p>
    </main>

    <!-- Lightbox -->
    <div id="lightbox" class="overlay hidden">
        <button id="lightbox-close" class="overlay-close" aria-label="Close">&times;</button>
        <div class="lightbox-body">
            <img id="lightbox-image" alt="">
            <div class="lightbox-meta">
                <span id="lightbox-category" class="category-tag"></span>
                <h3 id="lightbox-title"></h3>
                <p id="lightbox-description"></p>
            </div>
        </div>
    </div>

    <!-- Upload modal -->
    <div id="upload-modal" class="overlay hidden">
        <div class="modal">
            <div class="modal-header">
                <h3>Upload Photograph</h3>
                <button id="upload-close" class="overlay-close" aria-label="Close">&times;</button>
            </div>
            <div class="modal-body">
                <div class="upload-preview">
                    <div id="drop-zone" class="drop-zone">
                        <img id="upload-preview-image" class="hidden" alt="Preview">
                        <div id="drop-zone-prompt">
                            <p>Click to upload image</p>
                            <p class="drop-zone-hint">JPG, PNG, WebP up to 10MB</p>
                        </div>
                        <div id="analyzing-overlay" class="analyzing-overlay hidden">
                            <span>AI Analyzing...</span>
                        </div>
                    </div>
                    <input type="file" id="file-input" accept="image/*" class="hidden">
                </div>
                <form id="upload-form" class="upload-form">
                    <label for="upload-title">Title</label>
                    <input type="text" id="upload-title" required
                           placeholder="E.g. Golden Hour Solitude">

                    <label for="upload-category">Category</label>
                    <select id="upload-category">{category_options}</select>
                    <p id="category-hint" class="field-hint"></p>

                    <label for="upload-description">Description</label>
                    <textarea id="upload-description" rows="3"
                              placeholder="Tell the story behind this photo..."></textarea>

                    <div class="modal-actions">
                        <button type="button" id="upload-cancel" class="btn btn-ghost">Cancel</button>
                        <button type="submit" id="upload-submit" class="btn btn-primary" disabled>
                            Add to Gallery
                        </button>
                    </div>
                </form>
            </div>
        </div>
    </div>

    <footer>
        <p>&copy; <span id="footer-year"></span> Lumina Photography Portfolio.</p>
        <p class="build-info">v{version} &middot; {git_hash} &middot; {build_profile} &middot; {build_timestamp}</p>
    </footer>

    <script src="/static/lumina-sse.js"></script>
    <script src="/static/portfolio.js"></script>
</body>
</html>
"#
    );

    Html(html)
}
