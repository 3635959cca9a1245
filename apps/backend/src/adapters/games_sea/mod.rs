//! SeaORM adapter for completed-round records.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, OutcomeTotals};

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let active = games::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        word: Set(dto.word),
        attempts: Set(dto.attempts),
        won: Set(dto.won),
        played_at: Set(dto.played_at),
    };
    active.insert(conn).await
}

/// Games for `user_id` with `start <= played_at < end`.
pub async fn count_in_window<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    start: time::OffsetDateTime,
    end: time::OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::UserId.eq(user_id))
        .filter(games::Column::PlayedAt.gte(start))
        .filter(games::Column::PlayedAt.lt(end))
        .count(conn)
        .await
}

/// One row per (user, won) pair holding the game count and summed attempts.
pub async fn outcome_totals<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<OutcomeTotals>, sea_orm::DbErr> {
    games::Entity::find()
        .select_only()
        .column(games::Column::UserId)
        .column(games::Column::Won)
        .column_as(Expr::col(games::Column::Id).count(), "games")
        .column_as(Expr::col(games::Column::Attempts).sum(), "attempts")
        .group_by(games::Column::UserId)
        .group_by(games::Column::Won)
        .into_model::<OutcomeTotals>()
        .all(conn)
        .await
}

/// `(attempts, wins)` pairs over the user's won games.
pub async fn win_attempt_counts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<(i32, i64)>, sea_orm::DbErr> {
    games::Entity::find()
        .select_only()
        .column(games::Column::Attempts)
        .column_as(Expr::col(games::Column::Id).count(), "wins")
        .filter(games::Column::UserId.eq(user_id))
        .filter(games::Column::Won.eq(true))
        .group_by(games::Column::Attempts)
        .order_by_asc(games::Column::Attempts)
        .into_tuple()
        .all(conn)
        .await
}

/// Newest first.
pub async fn recent_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    limit: u64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::UserId.eq(user_id))
        .order_by_desc(games::Column::PlayedAt)
        .order_by_desc(games::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}

/// Win flags for every game of `user_id`, oldest first.
pub async fn outcomes_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<bool>, sea_orm::DbErr> {
    games::Entity::find()
        .select_only()
        .column(games::Column::Won)
        .filter(games::Column::UserId.eq(user_id))
        .order_by_asc(games::Column::PlayedAt)
        .order_by_asc(games::Column::Id)
        .into_tuple()
        .all(conn)
        .await
}
