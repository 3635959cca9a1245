//! Start, guess, win and lose against a one-word list so the secret is known.

use backend::domain::Marker;
use backend::errors::domain::{ConflictKind, DomainError, ValidationKind};
use backend::repos::games;
use backend::services::play::{self, RoundStatus};
use backend::services::stats::player_stats;
use time::macros::datetime;
use time::OffsetDateTime;

use crate::support::factory::{create_player, only_word};
use crate::support::test_state::build_test_state;

const NOON: OffsetDateTime = datetime!(2026-03-10 12:00 UTC);

#[actix_web::test]
async fn win_on_second_guess() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    let started = play::start_round(&state, uid, NOON).await.unwrap();
    assert!(!started.resumed);
    assert_eq!(started.round.attempts, 0);
    assert_eq!(started.round.attempts_left, 5);
    assert_eq!(started.usage.played_today, 0);

    let first = play::submit_guess(&state, uid, "slate", NOON).await.unwrap();
    assert_eq!(first.status, RoundStatus::InProgress);
    assert_eq!(first.attempt_no, 1);
    assert_eq!(first.attempts_left, 4);
    assert_eq!(
        first.feedback.markers(),
        [
            Marker::Absent,
            Marker::Absent,
            Marker::Exact,
            Marker::Absent,
            Marker::Exact
        ]
    );
    assert!(first.secret.is_none());
    assert!(first.share.is_none());

    let second = play::submit_guess(&state, uid, " Crane ", NOON).await.unwrap();
    assert_eq!(second.status, RoundStatus::Won);
    assert_eq!(second.attempt_no, 2);
    assert_eq!(second.secret.map(|w| w.to_string()).as_deref(), Some("CRANE"));
    let share = second.share.expect("share text on finish");
    assert!(share.starts_with("Guessword 2/5"));
    assert_eq!(share.lines().count(), 3);

    let current = play::current_round(&state, uid, NOON).await.unwrap();
    assert!(current.round.is_none());
    assert_eq!(current.usage.played_today, 1);
    assert_eq!(current.usage.remaining_today, 2);

    let stats = player_stats(state.db(), uid, &state.rules).await.unwrap();
    assert_eq!(stats.played, 1);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.guess_distribution, vec![0, 1, 0, 0, 0]);
    assert_eq!(stats.total_guesses, 2);
    assert_eq!(stats.streaks.current, 1);
}

#[actix_web::test]
async fn five_misses_lose_the_round() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOON).await.unwrap();
    let misses = ["plumb", "fight", "dowdy", "jokes", "sassy"];
    let mut last = None;
    for (i, guess) in misses.iter().enumerate() {
        let result = play::submit_guess(&state, uid, guess, NOON).await.unwrap();
        assert_eq!(usize::from(result.attempt_no), i + 1);
        last = Some(result);
    }
    let last = last.unwrap();
    assert_eq!(last.status, RoundStatus::Lost);
    assert_eq!(last.attempts_left, 0);
    assert_eq!(last.secret.map(|w| w.to_string()).as_deref(), Some("CRANE"));
    assert!(last.share.unwrap().starts_with("Guessword X/5"));

    let after = play::submit_guess(&state, uid, "crane", NOON).await;
    assert!(matches!(
        after,
        Err(DomainError::Conflict(ConflictKind::NoActiveRound, _))
    ));

    let recent = games::recent_for_player(state.db(), uid, 10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert!(!recent[0].won);
    assert_eq!(recent[0].attempts, 5);
    assert_eq!(recent[0].word, "CRANE");
}

#[actix_web::test]
async fn rejected_guesses_consume_no_attempt() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOON).await.unwrap();
    play::submit_guess(&state, uid, "slate", NOON).await.unwrap();

    let dup = play::submit_guess(&state, uid, "SLATE", NOON).await;
    assert!(matches!(
        dup,
        Err(DomainError::Conflict(ConflictKind::DuplicateGuess, _))
    ));
    for bad in ["abc", "toolong", "cr4ne", ""] {
        let res = play::submit_guess(&state, uid, bad, NOON).await;
        assert!(
            matches!(
                res,
                Err(DomainError::Validation(ValidationKind::InvalidGuessFormat, _))
            ),
            "{bad:?} should be rejected as a format error"
        );
    }

    let current = play::current_round(&state, uid, NOON).await.unwrap();
    let round = current.round.expect("round still open");
    assert_eq!(round.attempts, 1);
    assert_eq!(round.attempts_left, 4);
}

#[actix_web::test]
async fn guess_without_round_is_rejected() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;

    let res = play::submit_guess(&state, player.user.id, "crane", NOON).await;
    assert!(matches!(
        res,
        Err(DomainError::Conflict(ConflictKind::NoActiveRound, _))
    ));
}

#[actix_web::test]
async fn start_resumes_open_round() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    play::start_round(&state, uid, NOON).await.unwrap();
    play::submit_guess(&state, uid, "slate", NOON).await.unwrap();

    let again = play::start_round(&state, uid, NOON).await.unwrap();
    assert!(again.resumed);
    assert_eq!(again.round.attempts, 1);
    assert_eq!(again.round.guesses[0].guess.to_string(), "SLATE");
    assert_eq!(again.round.keyboard.get(&'A'), Some(&Marker::Exact));
    assert_eq!(again.round.keyboard.get(&'S'), Some(&Marker::Absent));
}

#[actix_web::test]
async fn empty_word_list_cannot_start() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;

    let res = play::start_round(&state, player.user.id, NOON).await;
    assert!(matches!(
        res,
        Err(DomainError::Conflict(ConflictKind::NoWordsAvailable, _))
    ));
    assert_eq!(state.rounds.open_rounds(), 0);
}

#[actix_web::test]
async fn round_from_yesterday_is_gone_after_midnight() {
    let state = build_test_state().await.expect("state");
    let player = create_player(&state, false).await;
    only_word(&state, "crane").await;
    let uid = player.user.id;

    let late = datetime!(2026-03-10 23:59 UTC);
    let next_day = datetime!(2026-03-11 00:01 UTC);

    play::start_round(&state, uid, late).await.unwrap();
    play::submit_guess(&state, uid, "slate", late).await.unwrap();

    let res = play::submit_guess(&state, uid, "crane", next_day).await;
    assert!(matches!(
        res,
        Err(DomainError::Conflict(ConflictKind::NoActiveRound, _))
    ));

    let fresh = play::start_round(&state, uid, next_day).await.unwrap();
    assert!(!fresh.resumed);
    assert_eq!(fresh.round.attempts, 0);
    assert_eq!(fresh.usage.played_today, 0);
}
