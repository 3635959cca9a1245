//! SeaORM adapter for per-guess history.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::guesses;

pub mod dto;

pub use dto::GuessCreate;

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GuessCreate,
) -> Result<guesses::Model, sea_orm::DbErr> {
    let active = guesses::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        word_id: Set(dto.word_id),
        guess_word: Set(dto.guess_word),
        attempt_no: Set(dto.attempt_no),
        played_at: Set(dto.played_at),
    };
    active.insert(conn).await
}

pub async fn count_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    guesses::Entity::find()
        .filter(guesses::Column::UserId.eq(user_id))
        .count(conn)
        .await
}
