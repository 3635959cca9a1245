//! SeaORM adapter for the word list.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::words;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<words::Model>, sea_orm::DbErr> {
    words::Entity::find()
        .order_by_asc(words::Column::Word)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word_id: i64,
) -> Result<Option<words::Model>, sea_orm::DbErr> {
    words::Entity::find_by_id(word_id).one(conn).await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word: &str,
) -> Result<bool, sea_orm::DbErr> {
    let n = words::Entity::find()
        .filter(words::Column::Word.eq(word))
        .count(conn)
        .await?;
    Ok(n > 0)
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word: String,
) -> Result<words::Model, sea_orm::DbErr> {
    let active = words::ActiveModel {
        id: NotSet,
        word: Set(word),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

/// Returns the number of rows deleted.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = words::Entity::delete_by_id(word_id).exec(conn).await?;
    Ok(result.rows_affected)
}
