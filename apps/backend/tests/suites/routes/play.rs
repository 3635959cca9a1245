// Round endpoints end to end.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::domain::RoundRules;
use serde_json::json;

use crate::common::assert_problem;
use crate::support::app_builder::create_test_app;
use crate::support::auth::bearer_for;
use crate::support::factory::{create_player, only_word};
use crate::support::test_state::{build_test_state, build_test_state_with, test_security};

#[actix_web::test]
async fn start_guess_and_win() {
    let state = build_test_state().await.expect("state");
    only_word(&state, "crane").await;
    let player = create_player(&state, false).await;
    let auth = bearer_for(&player, &test_security());
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/play/start")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["resumed"], false);
    assert_eq!(body["round"]["attempts_left"], 5);
    assert_eq!(body["usage"]["remaining_today"], 3);
    assert!(body["round"].get("secret").is_none());

    let req = test::TestRequest::post()
        .uri("/api/play/start")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["resumed"], true);

    let req = test::TestRequest::post()
        .uri("/api/play/guess")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "guess": "slate" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["guess"], "SLATE");
    assert_eq!(body["feedback"][2]["letter"], "A");
    assert_eq!(body["feedback"][2]["marker"], "exact");
    assert_eq!(body["feedback"][0]["marker"], "absent");
    assert!(body.get("secret").is_none());

    let req = test::TestRequest::get()
        .uri("/api/play")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["round"]["attempts"], 1);
    assert_eq!(body["round"]["keyboard"]["E"], "exact");

    let req = test::TestRequest::post()
        .uri("/api/play/guess")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "guess": "CRANE" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "won");
    assert_eq!(body["secret"], "CRANE");
    assert!(body["share"].as_str().unwrap().starts_with("Guessword 2/5"));

    let req = test::TestRequest::get()
        .uri("/api/play")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["round"].is_null());
    assert_eq!(body["usage"]["played_today"], 1);
}

#[actix_web::test]
async fn guess_errors_map_to_problem_details() {
    let state = build_test_state().await.expect("state");
    only_word(&state, "crane").await;
    let player = create_player(&state, false).await;
    let auth = bearer_for(&player, &test_security());
    let app = create_test_app(state).await;

    let guess = |word: &str| {
        test::TestRequest::post()
            .uri("/api/play/guess")
            .insert_header(("Authorization", auth.clone()))
            .set_json(json!({ "guess": word }))
            .to_request()
    };

    let resp = test::call_service(&app, guess("crane")).await;
    assert_problem(resp, "NO_ACTIVE_ROUND", StatusCode::CONFLICT).await;

    let req = test::TestRequest::post()
        .uri("/api/play/start")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, guess("cr4ne")).await;
    assert_problem(resp, "INVALID_GUESS", StatusCode::BAD_REQUEST).await;

    let resp = test::call_service(&app, guess("slate")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = test::call_service(&app, guess("slate")).await;
    assert_problem(resp, "DUPLICATE_GUESS", StatusCode::CONFLICT).await;
}

#[actix_web::test]
async fn quota_and_empty_list_errors() {
    let rules = RoundRules {
        max_attempts: 5,
        daily_rounds: 1,
    };
    let state = build_test_state_with(rules, None).await.expect("state");
    let player = create_player(&state, false).await;
    let auth = bearer_for(&player, &test_security());
    let app = create_test_app(state.clone()).await;

    let start = || {
        test::TestRequest::post()
            .uri("/api/play/start")
            .insert_header(("Authorization", auth.clone()))
            .to_request()
    };

    let resp = test::call_service(&app, start()).await;
    assert_problem(resp, "NO_WORDS_AVAILABLE", StatusCode::SERVICE_UNAVAILABLE).await;

    only_word(&state, "crane").await;
    assert_eq!(test::call_service(&app, start()).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/play/guess")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "guess": "crane" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let resp = test::call_service(&app, start()).await;
    assert_problem(resp, "DAILY_LIMIT_REACHED", StatusCode::TOO_MANY_REQUESTS).await;
}
