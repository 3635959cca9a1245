//! Rounds whose database side changes underneath them: a secret removed from
//! the list mid-round, and writes that fail outright.

use backend::entities::guesses;
use backend::errors::domain::{ConflictKind, DomainError};
use backend::repos::{games, guesses as guess_repo};
use backend::services::{self, play::{self, RoundStatus}};
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use time::macros::datetime;
use time::OffsetDateTime;

use crate::support::factory::{create_player, only_word};
use crate::support::test_state::build_test_state;

const NOON: OffsetDateTime = datetime!(2026-03-10 12:00 UTC);

#[actix_web::test]
async fn removing_the_secret_mid_round_keeps_the_round_playable() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    let entry = only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOON).await.unwrap();
    play::submit_guess(&state, uid, "slate", NOON).await.unwrap();

    services::words::remove(state.db(), entry.id).await.unwrap();

    let resumed = play::start_round(&state, uid, NOON).await.unwrap();
    assert!(resumed.resumed);
    assert_eq!(resumed.round.attempts, 1);

    let miss = play::submit_guess(&state, uid, "pious", NOON).await.unwrap();
    assert_eq!(miss.status, RoundStatus::InProgress);
    assert_eq!(miss.attempt_no, 2);

    let win = play::submit_guess(&state, uid, "crane", NOON).await.unwrap();
    assert_eq!(win.status, RoundStatus::Won);
    assert_eq!(win.attempt_no, 3);

    let recent = games::recent_for_player(state.db(), uid, 10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].word, "CRANE");
    assert!(recent[0].won);

    // The guess written before removal loses its link; later ones never had one.
    let rows = guesses::Entity::find()
        .order_by_asc(guesses::Column::AttemptNo)
        .all(state.db())
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.word_id.is_none()));

    // With the list now empty the player is not stuck on the old round.
    let next = play::start_round(&state, uid, NOON).await;
    assert!(matches!(
        next,
        Err(DomainError::Conflict(ConflictKind::NoWordsAvailable, _))
    ));
}

#[actix_web::test]
async fn guesses_keep_their_word_link_while_the_word_exists() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    let entry = only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOON).await.unwrap();
    play::submit_guess(&state, uid, "slate", NOON).await.unwrap();

    let rows = guesses::Entity::find().all(state.db()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].word_id, Some(entry.id));
}

#[actix_web::test]
async fn failed_guess_write_leaves_the_round_untouched() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOON).await.unwrap();
    play::submit_guess(&state, uid, "slate", NOON).await.unwrap();

    state
        .db()
        .execute_unprepared("DROP TABLE guesses")
        .await
        .unwrap();

    let res = play::submit_guess(&state, uid, "crane", NOON).await;
    assert!(matches!(res, Err(DomainError::Infra(_, _))), "got {res:?}");

    let current = play::current_round(&state, uid, NOON).await.unwrap();
    let round = current.round.expect("round still open");
    assert_eq!(round.attempts, 1);
    assert_eq!(round.attempts_left, 4);
    assert_eq!(current.usage.played_today, 0);

    let recent = games::recent_for_player(state.db(), uid, 10).await.unwrap();
    assert!(recent.is_empty());
}

#[actix_web::test]
async fn failed_game_write_rolls_back_the_winning_guess() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOON).await.unwrap();
    play::submit_guess(&state, uid, "slate", NOON).await.unwrap();
    assert_eq!(guess_repo::count_for_player(state.db(), uid).await.unwrap(), 1);

    state
        .db()
        .execute_unprepared("DROP TABLE games")
        .await
        .unwrap();

    // The guess row goes in first, then the game row fails.
    let res = play::submit_guess(&state, uid, "crane", NOON).await;
    assert!(matches!(res, Err(DomainError::Infra(_, _))), "got {res:?}");

    assert_eq!(guess_repo::count_for_player(state.db(), uid).await.unwrap(), 1);

    let slot = state.rounds.lock(uid, NOON.date()).await;
    let round = slot.round().expect("round still open");
    assert_eq!(round.attempts(), 1);
    assert_eq!(state.rounds.open_rounds(), 1);
}
