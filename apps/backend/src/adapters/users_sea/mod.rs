//! SeaORM adapter for user repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{user_credentials, users};

pub mod dto;

pub use dto::{CredentialsCreate, CredentialsUpdate, UserCreate};

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn find_user_by_sub<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Sub.eq(sub))
        .one(conn)
        .await
}

pub async fn find_credentials_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<user_credentials::Model>, sea_orm::DbErr> {
    user_credentials::Entity::find()
        .filter(user_credentials::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn find_credentials_by_user_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<user_credentials::Model>, sea_orm::DbErr> {
    user_credentials::Entity::find()
        .filter(user_credentials::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        sub: Set(dto.sub),
        username: Set(dto.username),
        is_admin: Set(dto.is_admin),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

pub async fn create_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CredentialsCreate,
) -> Result<user_credentials::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let credential_active = user_credentials::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        email: Set(dto.email),
        google_sub: Set(dto.google_sub),
        last_login: Set(Some(now)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    credential_active.insert(conn).await
}

pub async fn update_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CredentialsUpdate,
) -> Result<user_credentials::Model, sea_orm::DbErr> {
    let credentials = user_credentials::ActiveModel {
        id: Set(dto.id),
        google_sub: Set(dto.google_sub),
        last_login: Set(dto.last_login),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };
    credentials.update(conn).await
}

/// Users ordered by id, each with its credentials row when one exists.
pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(users::Model, Option<user_credentials::Model>)>, sea_orm::DbErr> {
    users::Entity::find()
        .find_also_related(user_credentials::Entity)
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
}

/// Returns the number of rows touched (0 when the user does not exist).
pub async fn set_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    is_admin: bool,
) -> Result<u64, sea_orm::DbErr> {
    let result = users::Entity::update_many()
        .col_expr(users::Column::IsAdmin, Expr::value(is_admin))
        .col_expr(
            users::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
