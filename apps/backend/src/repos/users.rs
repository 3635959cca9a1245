//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use users_adapter::{CredentialsCreate, CredentialsUpdate, UserCreate};

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub sub: String,
    pub username: Option<String>,
    pub is_admin: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// User credentials domain model
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub id: i64,
    pub user_id: i64,
    pub email: String,
    pub google_sub: Option<String>,
    pub last_login: Option<time::OffsetDateTime>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_user_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn find_user_by_sub<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_user_by_sub(conn, sub).await?;
    Ok(user.map(User::from))
}

pub async fn find_credentials_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<UserCredentials>, DomainError> {
    let credential = users_adapter::find_credentials_by_email(conn, email).await?;
    Ok(credential.map(UserCredentials::from))
}

pub async fn find_credentials_by_user_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<UserCredentials>, DomainError> {
    let credential = users_adapter::find_credentials_by_user_id(conn, user_id).await?;
    Ok(credential.map(UserCredentials::from))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

pub async fn create_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CredentialsCreate,
) -> Result<UserCredentials, DomainError> {
    let credential = users_adapter::create_credentials(conn, dto).await?;
    Ok(UserCredentials::from(credential))
}

pub async fn update_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CredentialsUpdate,
) -> Result<UserCredentials, DomainError> {
    let credential = users_adapter::update_credentials(conn, dto).await?;
    Ok(UserCredentials::from(credential))
}

/// All users by id, paired with their login email when credentials exist.
pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(User, Option<String>)>, DomainError> {
    let rows = users_adapter::list_users(conn).await?;
    Ok(rows
        .into_iter()
        .map(|(user, creds)| (User::from(user), creds.map(|c| c.email)))
        .collect())
}

/// Grant or revoke the admin flag; `NotFound(User)` when the id is unknown.
pub async fn set_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    is_admin: bool,
) -> Result<User, DomainError> {
    let touched = users_adapter::set_admin(conn, user_id, is_admin).await?;
    if touched == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::User,
            format!("User {user_id} not found"),
        ));
    }
    find_user_by_id(conn, user_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::User, format!("User {user_id} not found"))
    })
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            sub: model.sub,
            username: model.username,
            is_admin: model.is_admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<crate::entities::user_credentials::Model> for UserCredentials {
    fn from(model: crate::entities::user_credentials::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            email: model.email,
            google_sub: model.google_sub,
            last_login: model.last_login,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
