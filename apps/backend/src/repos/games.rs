//! Game record store: completed rounds, the source of quotas, the
//! leaderboard and player statistics.

use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::Date;

use crate::adapters::games_sea::{self as games_adapter, GameCreate};
use crate::domain::day::window_of;
use crate::domain::stats::Standing;
use crate::domain::FinishedRound;
use crate::entities::games;
use crate::errors::domain::DomainError;

/// Completed round as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub id: i64,
    pub user_id: i64,
    pub word: String,
    pub attempts: u32,
    pub won: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub played_at: time::OffsetDateTime,
}

impl From<games::Model> for GameRecord {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            word: model.word,
            attempts: u32::try_from(model.attempts).unwrap_or_default(),
            won: model.won,
            played_at: model.played_at,
        }
    }
}

/// Rounds `user_id` completed on the UTC calendar `day`.
pub async fn count_for_player_on_day<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    day: Date,
) -> Result<u64, DomainError> {
    let (start, end) = window_of(day);
    Ok(games_adapter::count_in_window(conn, user_id, start, end).await?)
}

pub async fn append<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    finished: &FinishedRound,
    played_at: time::OffsetDateTime,
) -> Result<GameRecord, DomainError> {
    let model = games_adapter::insert(
        conn,
        GameCreate {
            user_id,
            word: finished.secret.to_string(),
            attempts: i32::from(finished.attempts()),
            won: finished.won,
            played_at,
        },
    )
    .await?;
    Ok(GameRecord::from(model))
}

/// One unranked [`Standing`] per player with at least one completed round.
pub async fn leaderboard_rows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Standing>, DomainError> {
    let mut by_user: BTreeMap<i64, Standing> = BTreeMap::new();
    for row in games_adapter::outcome_totals(conn).await? {
        let entry = by_user.entry(row.user_id).or_insert(Standing {
            user_id: row.user_id,
            played: 0,
            wins: 0,
            total_attempts: 0,
        });
        let games = u64::try_from(row.games).unwrap_or_default();
        entry.played += games;
        entry.total_attempts += u64::try_from(row.attempts).unwrap_or_default();
        if row.won {
            entry.wins += games;
        }
    }
    Ok(by_user.into_values().collect())
}

/// Won rounds per attempt count, `1..=max_attempts`, zero-filled.
pub async fn guess_distribution<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    max_attempts: u8,
) -> Result<Vec<u64>, DomainError> {
    let mut buckets = vec![0u64; usize::from(max_attempts)];
    for (attempts, wins) in games_adapter::win_attempt_counts(conn, user_id).await? {
        let slot = usize::try_from(attempts).ok().and_then(|a| a.checked_sub(1));
        // Rounds won under a larger, since-lowered limit land in the last bucket.
        if let Some(last) = buckets.len().checked_sub(1) {
            if let Some(i) = slot {
                buckets[i.min(last)] += u64::try_from(wins).unwrap_or_default();
            }
        }
    }
    Ok(buckets)
}

pub async fn recent_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    limit: u64,
) -> Result<Vec<GameRecord>, DomainError> {
    let rows = games_adapter::recent_for_user(conn, user_id, limit).await?;
    Ok(rows.into_iter().map(GameRecord::from).collect())
}

/// Win flags oldest first, the input to streak computation.
pub async fn outcomes_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<bool>, DomainError> {
    Ok(games_adapter::outcomes_for_user(conn, user_id).await?)
}
