//! Round lifecycle for one player: start or resume, guess, inspect.
//!
//! Every operation holds the player's [`RoundSlot`](crate::state::round_store::RoundSlot)
//! for its whole duration. The slot only changes after the database write
//! for the transition has committed.

use std::collections::BTreeMap;

use rand::seq::IndexedRandom;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::db::txn::with_txn;
use crate::domain::day::utc_day;
use crate::domain::feedback::keyboard_hints;
use crate::domain::{Feedback, FinishedRound, Marker, Round, RoundRules, RoundState, Word};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::{games, guesses, words};
use crate::state::app_state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessView {
    pub guess: Word,
    pub feedback: Feedback,
}

/// An open round as the player may see it; the secret stays hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub attempts: u8,
    pub attempts_left: u8,
    pub max_attempts: u8,
    pub guesses: Vec<GuessView>,
    pub keyboard: BTreeMap<char, Marker>,
}

impl RoundView {
    fn of(round: &Round, rules: &RoundRules) -> Self {
        Self {
            attempts: round.attempts(),
            attempts_left: round.attempts_left(rules),
            max_attempts: rules.max_attempts,
            guesses: round
                .history()
                .iter()
                .map(|r| GuessView {
                    guess: r.guess,
                    feedback: r.feedback,
                })
                .collect(),
            keyboard: keyboard_hints(round.history().iter().map(|r| &r.feedback)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayUsage {
    pub played_today: u32,
    pub remaining_today: u32,
    pub daily_rounds: u32,
}

impl DayUsage {
    fn new(played: u64, rules: &RoundRules) -> Self {
        let played_today = u32::try_from(played).unwrap_or(u32::MAX);
        Self {
            played_today,
            remaining_today: rules.daily_rounds.saturating_sub(played_today),
            daily_rounds: rules.daily_rounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentRound {
    pub round: Option<RoundView>,
    pub usage: DayUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartedRound {
    pub round: RoundView,
    /// True when an already-open round was returned instead of a new one
    pub resumed: bool,
    pub usage: DayUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of one accepted guess. `secret` and `share` are only filled once
/// the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessResult {
    pub guess: Word,
    pub feedback: Feedback,
    pub attempt_no: u8,
    pub attempts_left: u8,
    pub status: RoundStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
}

async fn usage_today(state: &AppState, user_id: i64, now: OffsetDateTime) -> Result<DayUsage, DomainError> {
    let played = games::count_for_player_on_day(state.db(), user_id, utc_day(now)).await?;
    Ok(DayUsage::new(played, &state.rules))
}

/// Open today's round for `user_id`, or hand back the one already open.
pub async fn start_round(
    state: &AppState,
    user_id: i64,
    now: OffsetDateTime,
) -> Result<StartedRound, DomainError> {
    let today = utc_day(now);
    let mut slot = state.rounds.lock(user_id, today).await;
    let usage = usage_today(state, user_id, now).await?;

    if let Some(round) = slot.round() {
        return Ok(StartedRound {
            round: RoundView::of(round, &state.rules),
            resumed: true,
            usage,
        });
    }

    if usage.played_today >= state.rules.daily_rounds {
        return Err(DomainError::conflict(
            ConflictKind::DailyLimitReached,
            format!(
                "All {} rounds for today have been played; come back after midnight UTC",
                state.rules.daily_rounds
            ),
        ));
    }

    let pool = words::list_all(state.db()).await?;
    let picked = {
        let mut rng = state.rng.lock();
        pool.choose(&mut *rng).cloned()
    };
    let Some(entry) = picked else {
        return Err(DomainError::conflict(
            ConflictKind::NoWordsAvailable,
            "The word list is empty",
        ));
    };

    let round = Round::open(entry.word, entry.id, today);
    let view = RoundView::of(&round, &state.rules);
    slot.set(round);
    info!(user_id, word_id = entry.id, pool_size = pool.len(), "round started");

    Ok(StartedRound {
        round: view,
        resumed: false,
        usage,
    })
}

/// Score `raw_guess` against the player's open round and persist the result.
///
/// Rejected guesses (bad format, duplicates) consume no attempt. When the
/// write fails the slot keeps the pre-guess round.
pub async fn submit_guess(
    state: &AppState,
    user_id: i64,
    raw_guess: &str,
    now: OffsetDateTime,
) -> Result<GuessResult, DomainError> {
    let mut slot = state.rounds.lock(user_id, utc_day(now)).await;
    let round = slot.round().cloned().ok_or_else(|| {
        DomainError::conflict(ConflictKind::NoActiveRound, "Start a round before guessing")
    })?;

    let guess = Word::parse_guess(raw_guess)?;
    let outcome = round.guess(guess, &state.rules)?;

    let word_id = round.word_id();
    let attempt_no = outcome.attempt_no;
    let finished: Option<FinishedRound> = match &outcome.next {
        RoundState::Won(f) | RoundState::Lost(f) => Some(f.clone()),
        RoundState::InProgress(_) => None,
    };
    with_txn(state, move |txn| {
        Box::pin(async move {
            // The secret may have been removed from the list mid-round.
            let word_id = words::find_by_id(txn, word_id).await?.map(|entry| entry.id);
            guesses::append(txn, user_id, word_id, guess, attempt_no, now).await?;
            if let Some(finished) = &finished {
                games::append(txn, user_id, finished, now).await?;
            }
            Ok::<_, DomainError>(())
        })
    })
    .await?;

    let (status, attempts_left, secret, share) = match outcome.next {
        RoundState::InProgress(next) => {
            let left = next.attempts_left(&state.rules);
            slot.set(next);
            (RoundStatus::InProgress, left, None, None)
        }
        RoundState::Won(done) | RoundState::Lost(done) => {
            slot.clear();
            let status = if done.won {
                RoundStatus::Won
            } else {
                RoundStatus::Lost
            };
            info!(user_id, won = done.won, attempts = done.attempts(), "round finished");
            let left = state.rules.max_attempts.saturating_sub(done.attempts());
            (status, left, Some(done.secret), Some(done.share_text(&state.rules)))
        }
    };

    Ok(GuessResult {
        guess,
        feedback: outcome.feedback,
        attempt_no,
        attempts_left,
        status,
        secret,
        share,
    })
}

/// The player's open round (if any) and today's quota usage.
pub async fn current_round(
    state: &AppState,
    user_id: i64,
    now: OffsetDateTime,
) -> Result<CurrentRound, DomainError> {
    let slot = state.rounds.lock(user_id, utc_day(now)).await;
    let usage = usage_today(state, user_id, now).await?;
    Ok(CurrentRound {
        round: slot.round().map(|r| RoundView::of(r, &state.rules)),
        usage,
    })
}
