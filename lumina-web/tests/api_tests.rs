//! Router-level integration tests for the gallery, contact, and health
//! endpoints.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` against the
//! real router; the analyzer runs without a credential so no network is
//! touched.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use lumina_common::events::EventBus;
use lumina_web::services::Analyzer;
use lumina_web::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn seeded_router() -> axum::Router {
    build_router(AppState::new(Analyzer::new(None), EventBus::new(64)))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok_with_gallery_size() {
    let app = seeded_router();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "lumina-web");
    assert_eq!(json["photos"], 6);
}

#[tokio::test]
async fn photos_list_returns_seed_collection_newest_first() {
    let app = seeded_router();
    let response = app
        .oneshot(Request::get("/api/photos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let photos = json.as_array().unwrap();
    assert_eq!(photos.len(), 6);
    assert_eq!(photos[0]["title"], "Urban Solitude");
    assert_eq!(photos[0]["category"], "Portraits");
}

#[tokio::test]
async fn photos_filter_by_category_returns_matching_subsequence() {
    let app = seeded_router();
    let response = app
        .oneshot(
            Request::get("/api/photos?category=Abstract")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let photos = json.as_array().unwrap();
    assert_eq!(photos.len(), 2);
    for photo in photos {
        assert_eq!(photo["category"], "Abstract");
    }
}

#[tokio::test]
async fn photos_filter_all_sentinel_returns_everything() {
    let app = seeded_router();
    let response = app
        .oneshot(
            Request::get("/api/photos?category=All")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn photos_filter_with_unknown_category_is_rejected() {
    let app = seeded_router();
    let response = app
        .oneshot(
            Request::get("/api/photos?category=Street")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unknown_image_id_is_not_found() {
    let app = seeded_router();
    let response = app
        .oneshot(
            Request::get("/photos/00000000-0000-0000-0000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn contact_accepts_valid_submission() {
    let app = seeded_router();
    let payload = serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "Portrait Session",
        "message": "I'd like to book a session in June.",
    });

    let response = app
        .oneshot(
            Request::post("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "sent");
}

#[tokio::test]
async fn contact_rejects_unknown_subject() {
    let app = seeded_router();
    let payload = serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "General Question",
        "message": "Hello!",
    });

    let response = app
        .oneshot(
            Request::post("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_rejects_empty_fields() {
    let app = seeded_router();
    let payload = serde_json::json!({
        "name": "",
        "email": "jane@example.com",
        "subject": "Other",
        "message": "Hello!",
    });

    let response = app
        .oneshot(
            Request::post("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gallery_page_serves_html_with_filter_buttons() {
    let app = seeded_router();
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Lumina"));
    for name in ["All", "Portraits", "Landscapes", "Events", "Abstract"] {
        assert!(html.contains(&format!("data-category=\"{}\"", name)));
    }
}

#[tokio::test]
async fn contact_page_lists_all_subject_options() {
    let app = seeded_router();
    let response = app
        .oneshot(Request::get("/contact").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    for subject in [
        "Portrait Session",
        "Event Coverage",
        "Print Purchase",
        "Collaboration",
        "Other",
    ] {
        assert!(html.contains(subject), "missing subject option {}", subject);
    }
}
