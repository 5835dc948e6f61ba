// tests/support/helpers.rs
use super::mocks;
use axum::body;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

use catchup_platform::application::ports::localization::{Locale, MessageLocalizer};
use catchup_platform::application::services::ApplicationServices;
use catchup_platform::domain::favorite_source::FavoriteSourceRepository;
use catchup_platform::infrastructure::localization::EmbeddedMessageCatalog;
use catchup_platform::presentation::http::{routes::build_router, state::HttpState};

pub fn test_localizer() -> Arc<dyn MessageLocalizer> {
    Arc::new(EmbeddedMessageCatalog::load(Locale::parse("en").expect("locale")).expect("catalog"))
}

pub fn build_test_services(repo: Arc<dyn FavoriteSourceRepository>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(repo, test_localizer()))
}

pub fn build_test_state(repo: Arc<dyn FavoriteSourceRepository>) -> HttpState {
    HttpState {
        services: build_test_services(repo),
    }
}

pub async fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(mocks::InMemoryFavoriteSourceRepo::new())).await
}

/// Build a test router around a caller-provided repository.
pub async fn make_test_router_with_repo(repo: Arc<dyn FavoriteSourceRepository>) -> axum::Router {
    build_router(build_test_state(repo), &["*".to_string()])
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
/// Returns the `message` field for further checks.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}
