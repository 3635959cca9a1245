//! DTOs for games_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for recording a completed round.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub user_id: i64,
    pub word: String,
    pub attempts: i32,
    pub won: bool,
    pub played_at: time::OffsetDateTime,
}

/// Per-user, per-outcome aggregate row.
#[derive(Debug, Clone, FromQueryResult)]
pub struct OutcomeTotals {
    pub user_id: i64,
    pub won: bool,
    pub games: i64,
    pub attempts: i64,
}
