use actix_web::test;

use crate::support::app_builder::create_test_app;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn root_greets_in_plain_text() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/plain")));
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Guess The Word");
}

#[actix_web::test]
async fn health_reports_database_and_rounds() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers().get("cache-control").and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    assert!(resp.headers().get("x-request-id").is_some());
    assert_eq!(
        resp.headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["open_rounds"], 0);
    assert!(body.get("db_error").is_none());
    assert!(body["migrations"].as_str().is_some_and(|m| m.starts_with('m')));
}
