use backend::errors::domain::{ConflictKind, DomainError, ValidationKind};
use backend::repos::users;
use backend::services::users::ensure_user;
use backend::AdminEmails;
use backend_test_support::unique_helpers::{unique_email, unique_str};

use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn first_login_creates_user_and_credentials() {
    let state = build_test_state().await.expect("state");
    let email = unique_email("ada").to_lowercase();
    let sub = unique_str("google");

    let identity = ensure_user(state.db(), &email, Some("Ada"), &sub, None)
        .await
        .unwrap();
    assert_eq!(identity.email, email);
    assert_eq!(identity.user.sub, sub);
    assert_eq!(identity.user.username.as_deref(), Some("Ada"));
    assert!(!identity.user.is_admin);

    let creds = users::find_credentials_by_email(state.db(), &email)
        .await
        .unwrap()
        .expect("credentials stored");
    assert_eq!(creds.user_id, identity.user.id);
    assert_eq!(creds.google_sub.as_deref(), Some(sub.as_str()));
    assert!(creds.last_login.is_some());
}

#[actix_web::test]
async fn repeat_login_is_idempotent_and_normalizes_email() {
    let state = build_test_state().await.expect("state");
    let email = unique_email("grace").to_lowercase();
    let sub = unique_str("google");

    let first = ensure_user(state.db(), &email, None, &sub, None)
        .await
        .unwrap();
    let shouted = format!("  {}  ", email.to_uppercase());
    let second = ensure_user(state.db(), &shouted, None, &sub, None)
        .await
        .unwrap();

    assert_eq!(first.user.id, second.user.id);
    assert_eq!(second.email, email);

    let creds = users::find_credentials_by_email(state.db(), &email)
        .await
        .unwrap()
        .unwrap();
    assert!(creds.last_login.is_some());
}

#[actix_web::test]
async fn username_falls_back_to_email_local_part() {
    let state = build_test_state().await.expect("state");
    let email = unique_email("linus").to_lowercase();
    let local = email.split('@').next().unwrap().to_string();

    let identity = ensure_user(state.db(), &email, Some("   "), &unique_str("g"), None)
        .await
        .unwrap();
    assert_eq!(identity.user.username, Some(local));
}

#[actix_web::test]
async fn different_google_account_for_same_email_conflicts() {
    let state = build_test_state().await.expect("state");
    let email = unique_email("dup").to_lowercase();

    ensure_user(state.db(), &email, None, &unique_str("g"), None)
        .await
        .unwrap();
    let res = ensure_user(state.db(), &email, None, &unique_str("g"), None).await;
    assert!(matches!(
        res,
        Err(DomainError::Conflict(ConflictKind::GoogleSubMismatch, _))
    ));
}

#[actix_web::test]
async fn malformed_identity_is_rejected() {
    let state = build_test_state().await.expect("state");

    let res = ensure_user(state.db(), "not-an-email", None, "sub", None).await;
    assert!(matches!(
        res,
        Err(DomainError::Validation(ValidationKind::InvalidEmail, _))
    ));

    let res = ensure_user(state.db(), &unique_email("x"), None, "   ", None).await;
    assert!(matches!(
        res,
        Err(DomainError::Validation(ValidationKind::InvalidGoogleSub, _))
    ));
}

#[actix_web::test]
async fn admin_email_list_flags_and_promotes() {
    let state = build_test_state().await.expect("state");
    let admins = AdminEmails::parse("boss@example.test,*@ops.example.test").unwrap();

    let boss = ensure_user(state.db(), "Boss@Example.test", None, "g-boss", Some(&admins))
        .await
        .unwrap();
    assert!(boss.user.is_admin);

    // Created before the list applied, promoted on the next login.
    let ops_email = format!("{}@ops.example.test", unique_str("oncall"));
    let before = ensure_user(state.db(), &ops_email, None, "g-ops", None)
        .await
        .unwrap();
    assert!(!before.user.is_admin);
    let after = ensure_user(state.db(), &ops_email, None, "g-ops", Some(&admins))
        .await
        .unwrap();
    assert!(after.user.is_admin);
    assert_eq!(after.user.id, before.user.id);

    let plain = ensure_user(state.db(), &unique_email("p"), None, "g-plain", Some(&admins))
        .await
        .unwrap();
    assert!(!plain.user.is_admin);
}
