use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::{games, users};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUserView {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    pub played: u64,
    pub wins: u64,
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<AdminUserView>, DomainError> {
    let totals: HashMap<i64, (u64, u64)> = games::leaderboard_rows(conn)
        .await?
        .into_iter()
        .map(|s| (s.user_id, (s.played, s.wins)))
        .collect();

    Ok(users::list_users(conn)
        .await?
        .into_iter()
        .map(|(user, email)| {
            let (played, wins) = totals.get(&user.id).copied().unwrap_or_default();
            AdminUserView {
                id: user.id,
                username: user.username,
                email,
                is_admin: user.is_admin,
                played,
                wins,
            }
        })
        .collect())
}

/// Grant or revoke admin for `target_id`, acting as `actor_id`.
pub async fn set_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor_id: i64,
    target_id: i64,
    is_admin: bool,
) -> Result<AdminUserView, DomainError> {
    let user = users::set_admin(conn, target_id, is_admin).await?;
    info!(actor_id, target_id, is_admin, "admin flag changed");
    let (played, wins) = games::leaderboard_rows(conn)
        .await?
        .into_iter()
        .find(|s| s.user_id == target_id)
        .map(|s| (s.played, s.wins))
        .unwrap_or_default();
    let email = users::find_credentials_by_user_id(conn, target_id)
        .await?
        .map(|c| c.email);
    Ok(AdminUserView {
        id: user.id,
        username: user.username,
        email,
        is_admin: user.is_admin,
        played,
        wins,
    })
}
