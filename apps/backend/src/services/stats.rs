use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::domain::stats::{streaks, win_pct, Streaks};
use crate::domain::RoundRules;
use crate::errors::domain::DomainError;
use crate::repos::games::{self, GameRecord};
use crate::repos::guesses;

const RECENT_GAMES: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub played: u64,
    pub wins: u64,
    pub losses: u64,
    pub win_pct: u32,
    pub streaks: Streaks,
    /// Index `i` counts rounds won on guess `i + 1`
    pub guess_distribution: Vec<u64>,
    pub total_guesses: u64,
    pub recent: Vec<GameRecord>,
}

pub async fn player_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    rules: &RoundRules,
) -> Result<PlayerStats, DomainError> {
    let outcomes = games::outcomes_for_player(conn, user_id).await?;
    let played = outcomes.len() as u64;
    let wins = outcomes.iter().filter(|&&won| won).count() as u64;

    Ok(PlayerStats {
        played,
        wins,
        losses: played - wins,
        win_pct: win_pct(wins, played),
        streaks: streaks(outcomes),
        guess_distribution: games::guess_distribution(conn, user_id, rules.max_attempts).await?,
        total_guesses: guesses::count_for_player(conn, user_id).await?,
        recent: games::recent_for_player(conn, user_id, RECENT_GAMES).await?,
    })
}
