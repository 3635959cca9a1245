use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::domain::stats::{rank, win_pct};
use crate::errors::domain::DomainError;
use crate::repos::{games, users};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: i64,
    pub username: Option<String>,
    pub played: u64,
    pub wins: u64,
    pub losses: u64,
    pub win_pct: u32,
    /// Mean guesses per completed round, two decimals
    pub avg_attempts: f64,
}

/// Players with at least one completed round, best first, truncated to `limit`.
pub async fn leaderboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: usize,
) -> Result<Vec<LeaderboardEntry>, DomainError> {
    let standings = games::leaderboard_rows(conn).await?;
    let names: HashMap<i64, Option<String>> = users::list_users(conn)
        .await?
        .into_iter()
        .map(|(user, _)| (user.id, user.username))
        .collect();

    Ok(rank(standings)
        .into_iter()
        .take(limit)
        .map(|(position, s)| LeaderboardEntry {
            rank: position,
            user_id: s.user_id,
            username: names.get(&s.user_id).cloned().flatten(),
            played: s.played,
            wins: s.wins,
            losses: s.played - s.wins,
            win_pct: win_pct(s.wins, s.played),
            avg_attempts: avg(s.total_attempts, s.played),
        })
        .collect())
}

fn avg(total: u64, n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (total as f64 / n as f64 * 100.0).round() / 100.0
}
