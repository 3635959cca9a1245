//! Requests for the same player serialize on the round slot; different
//! players proceed independently.

use backend::services::play::{self, RoundStatus};
use time::macros::datetime;
use time::OffsetDateTime;

use crate::support::factory::{create_player, only_word};
use crate::support::test_state::build_test_state;

const NOW: OffsetDateTime = datetime!(2026-03-10 15:00 UTC);

#[actix_web::test]
async fn concurrent_guesses_get_distinct_attempt_numbers() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOW).await.unwrap();

    let (a, b) = tokio::join!(
        play::submit_guess(&state, uid, "slate", NOW),
        play::submit_guess(&state, uid, "pious", NOW),
    );
    let mut numbers = vec![a.unwrap().attempt_no, b.unwrap().attempt_no];
    numbers.sort_unstable();
    assert_eq!(numbers, vec![1, 2]);

    let round = play::current_round(&state, uid, NOW)
        .await
        .unwrap()
        .round
        .expect("round open");
    assert_eq!(round.attempts, 2);
}

#[actix_web::test]
async fn concurrent_duplicate_guess_counts_once() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOW).await.unwrap();

    let (a, b) = tokio::join!(
        play::submit_guess(&state, uid, "slate", NOW),
        play::submit_guess(&state, uid, "slate", NOW),
    );
    assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);

    let round = play::current_round(&state, uid, NOW)
        .await
        .unwrap()
        .round
        .expect("round open");
    assert_eq!(round.attempts, 1);
}

#[actix_web::test]
async fn players_rounds_are_independent() {
    let state = build_test_state().await.expect("state");
    let alice = create_player(&state, false).await;
    let bob = create_player(&state, false).await;
    only_word(&state, "crane").await;

    let (a, b) = tokio::join!(
        play::start_round(&state, alice.user.id, NOW),
        play::start_round(&state, bob.user.id, NOW),
    );
    assert!(!a.unwrap().resumed);
    assert!(!b.unwrap().resumed);
    assert_eq!(state.rounds.open_rounds(), 2);

    let won = play::submit_guess(&state, alice.user.id, "crane", NOW)
        .await
        .unwrap();
    assert_eq!(won.status, RoundStatus::Won);

    let bob_round = play::current_round(&state, bob.user.id, NOW)
        .await
        .unwrap()
        .round
        .expect("bob still playing");
    assert_eq!(bob_round.attempts, 0);
}
