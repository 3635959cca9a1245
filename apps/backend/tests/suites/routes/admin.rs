// Admin scope: guard, word list management and user flags.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::services::words::SEED_WORDS;
use serde_json::json;

use crate::common::assert_problem;
use crate::support::app_builder::create_test_app;
use crate::support::auth::bearer_for;
use crate::support::factory::create_player;
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn non_admin_is_forbidden() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    let auth = bearer_for(&player, &test_security());
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/words")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "ADMIN_REQUIRED", StatusCode::FORBIDDEN).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/words")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "word": "apple" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "ADMIN_REQUIRED", StatusCode::FORBIDDEN).await;
}

#[actix_web::test]
async fn word_list_crud() {
    let state = build_test_state().await.expect("state");
    let admin = create_player(&state, true).await;
    let auth = bearer_for(&admin, &test_security());
    let app = create_test_app(state).await;

    let add = |word: &str| {
        test::TestRequest::post()
            .uri("/api/admin/words")
            .insert_header(("Authorization", auth.clone()))
            .set_json(json!({ "word": word }))
            .to_request()
    };

    let resp = test::call_service(&app, add("plant")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["word"], "PLANT");
    let id = body["id"].as_i64().unwrap();

    let resp = test::call_service(&app, add("PLANT")).await;
    assert_problem(resp, "WORD_EXISTS", StatusCode::CONFLICT).await;

    let resp = test::call_service(&app, add("plants")).await;
    assert_problem(resp, "INVALID_WORD", StatusCode::BAD_REQUEST).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/words")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let delete = |uri: String| {
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("Authorization", auth.clone()))
            .to_request()
    };
    let resp = test::call_service(&app, delete(format!("/api/admin/words/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, delete(format!("/api/admin/words/{id}"))).await;
    assert_problem(resp, "WORD_NOT_FOUND", StatusCode::NOT_FOUND).await;

    let resp = test::call_service(&app, delete("/api/admin/words/abc".to_string())).await;
    assert_problem(resp, "INVALID_ID", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn seed_reports_added_and_total() {
    let state = build_test_state().await.expect("state");
    let admin = create_player(&state, true).await;
    let auth = bearer_for(&admin, &test_security());
    let app = create_test_app(state).await;

    let seed = || {
        test::TestRequest::post()
            .uri("/api/admin/words/seed")
            .insert_header(("Authorization", auth.clone()))
            .to_request()
    };

    let body: serde_json::Value = test::read_body_json(test::call_service(&app, seed()).await).await;
    assert_eq!(body["added"], SEED_WORDS.len());
    assert_eq!(body["total"], SEED_WORDS.len());

    let body: serde_json::Value = test::read_body_json(test::call_service(&app, seed()).await).await;
    assert_eq!(body["added"], 0);
    assert_eq!(body["total"], SEED_WORDS.len());
}

#[actix_web::test]
async fn users_listing_and_admin_flag() {
    let state = build_test_state().await.expect("state");
    let admin = create_player(&state, true).await;
    let player = create_player(&state, false).await;
    let admin_auth = bearer_for(&admin, &test_security());
    let player_auth = bearer_for(&player, &test_security());
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/users")
        .insert_header(("Authorization", admin_auth.clone()))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let users = body.as_array().expect("array");
    assert_eq!(users.len(), 2);
    assert_eq!(users[1]["email"], player.email.as_str());

    let req = test::TestRequest::patch()
        .uri(&format!("/api/admin/users/{}", player.user.id))
        .insert_header(("Authorization", admin_auth.clone()))
        .set_json(json!({ "is_admin": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_admin"], true);

    // The promoted player passes the guard on the very next request.
    let req = test::TestRequest::get()
        .uri("/api/admin/words")
        .insert_header(("Authorization", player_auth))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::patch()
        .uri("/api/admin/users/424242")
        .insert_header(("Authorization", admin_auth))
        .set_json(json!({ "is_admin": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "USER_NOT_FOUND", StatusCode::NOT_FOUND).await;
}
