mod common;

use axum::http::StatusCode;
use common::{MockLinkRepo, make_server};
use linkbook::error::AppError;
use serde_json::Value;

#[tokio::test]
async fn test_welcome_message() {
    let repo = MockLinkRepo::new();

    let server = make_server(repo);
    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Welcome to the Link API");
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let mut repo = MockLinkRepo::new();
    repo.expect_find_all().times(1).returning(|| Ok(vec![]));

    let server = make_server(repo);
    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degrades_on_database_failure() {
    let mut repo = MockLinkRepo::new();
    repo.expect_find_all()
        .times(1)
        .returning(|| Err(AppError::internal("Internal server error: no reachable servers")));

    let server = make_server(repo);
    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
