use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::users::ensure_user;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
    #[serde(default)]
    pub google_sub: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub is_admin: bool,
}

/// Creates or reuses a user for a federated identity and returns a bearer token.
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest {
        email,
        name,
        google_sub,
    } = body.into_inner();
    let admin_emails = app_state.admin_emails.clone();

    let identity = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ensure_user(
                txn,
                &email,
                name.as_deref(),
                &google_sub,
                admin_emails.as_deref(),
            )
            .await
        })
    })
    .await?;

    let token = mint_access_token(
        &identity.user.sub,
        &identity.email,
        SystemTime::now(),
        &app_state.security,
    )?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user_id: identity.user.id,
        is_admin: identity.user.is_admin,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
