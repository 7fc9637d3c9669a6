mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linksnip::api::handlers::health_handler;

#[tokio::test]
async fn test_health_reports_store_status() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "Ab3dE9", "https://example.com/a").await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "1 links");
    assert!(json["version"].is_string());
}
