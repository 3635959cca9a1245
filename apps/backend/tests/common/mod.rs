#![allow(dead_code)]

pub mod proptest_prelude;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_parts;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const PROBLEM_TYPE_BASE: &str = "https://guessword.app/errors/";

/// Assert the error contract, the problem+json content type and that `type`
/// lives under our problem base URL.
pub async fn assert_problem(resp: ServiceResponse<BoxBody>, code: &str, status: StatusCode) {
    let actual_status = resp.status();
    let headers = resp.headers().clone();
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/problem+json");

    let body = actix_web::test::read_body(resp).await;
    let value: serde_json::Value = serde_json::from_slice(&body).expect("problem body is JSON");
    let type_url = value["type"].as_str().unwrap_or_default();
    assert!(
        type_url.starts_with(PROBLEM_TYPE_BASE),
        "unexpected problem type {type_url}"
    );

    assert_problem_details_from_parts(actual_status, &headers, &body, code, status, None);
}
