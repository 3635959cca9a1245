use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::leaderboard::leaderboard;
use crate::state::app_state::AppState;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

async fn list(
    query: web::Query<LeaderboardQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let entries = leaderboard(app_state.db(), limit).await?;
    Ok(HttpResponse::Ok().json(entries))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query: {err}")).into()
    }))
    .service(web::resource("").route(web::get().to(list)));
}
