use actix_web::{web, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::play;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

async fn current(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = play::current_round(&app_state, user.id, OffsetDateTime::now_utc()).await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn start(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let started = play::start_round(&app_state, user.id, OffsetDateTime::now_utc()).await?;
    let response = if started.resumed {
        HttpResponse::Ok().json(started)
    } else {
        HttpResponse::Created().json(started)
    };
    Ok(response)
}

async fn guess(
    user: CurrentUser,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let result =
        play::submit_guess(&app_state, user.id, &body.guess, OffsetDateTime::now_utc()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(current)))
        .service(web::resource("/start").route(web::post().to(start)))
        .service(web::resource("/guess").route(web::post().to(guess)));
}
