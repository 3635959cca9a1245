//! Rows the tests need, inserted straight through the repos.

use backend::domain::Word;
use backend::repos::users::{self, CredentialsCreate, User, UserCreate};
use backend::repos::words::{self, WordEntry};
use backend::AppState;
use backend_test_support::unique_helpers::{unique_email, unique_str};

pub struct TestPlayer {
    pub user: User,
    pub email: String,
}

pub async fn create_player(state: &AppState, is_admin: bool) -> TestPlayer {
    let email = unique_email("player").to_lowercase();
    let user = users::create_user(
        state.db(),
        UserCreate::new(unique_str("sub"), Some("Player".to_string())).admin(is_admin),
    )
    .await
    .expect("create user");
    users::create_credentials(
        state.db(),
        CredentialsCreate::new(user.id, email.clone()).with_google_sub(user.sub.clone()),
    )
    .await
    .expect("create credentials");
    TestPlayer { user, email }
}

pub async fn add_words(state: &AppState, list: &[&str]) -> Vec<WordEntry> {
    let mut out = Vec::with_capacity(list.len());
    for raw in list {
        let word = Word::parse(raw).expect("valid test word");
        out.push(words::add(state.db(), word).await.expect("insert word"));
    }
    out
}

/// Installs a one-word list so the secret is known.
pub async fn only_word(state: &AppState, raw: &str) -> WordEntry {
    add_words(state, &[raw]).await.remove(0)
}
