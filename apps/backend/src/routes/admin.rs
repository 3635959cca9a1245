//! Word-list and user management. Every handler takes [`AdminUser`], which
//! is the whole authorization check.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{AdminUser, PathId, ValidatedJson};
use crate::services::{admin, words};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddWordRequest {
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct SetAdminRequest {
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
struct SeedResponse {
    added: usize,
    total: usize,
}

async fn list_words(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(words::list(app_state.db()).await?))
}

async fn add_word(
    _admin: AdminUser,
    body: ValidatedJson<AddWordRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let entry = words::add(app_state.db(), &body.word).await?;
    Ok(HttpResponse::Created().json(entry))
}

async fn remove_word(
    _admin: AdminUser,
    word_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    words::remove(app_state.db(), word_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn seed_words(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let added = with_txn(&app_state, |txn| Box::pin(words::seed(txn))).await?;
    let total = words::list(app_state.db()).await?.len();
    Ok(HttpResponse::Ok().json(SeedResponse { added, total }))
}

async fn list_users(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(admin::list_users(app_state.db()).await?))
}

async fn set_admin(
    admin_user: AdminUser,
    user_id: PathId,
    body: ValidatedJson<SetAdminRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = admin::set_admin(app_state.db(), admin_user.id, user_id.0, body.is_admin).await?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/words")
            .route(web::get().to(list_words))
            .route(web::post().to(add_word)),
    )
    .service(web::resource("/words/seed").route(web::post().to(seed_words)))
    .service(web::resource("/words/{id}").route(web::delete().to(remove_word)))
    .service(web::resource("/users").route(web::get().to(list_users)))
    .service(web::resource("/users/{id}").route(web::patch().to(set_admin)));
}
