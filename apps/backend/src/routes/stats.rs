use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::services::stats::player_stats;
use crate::state::app_state::AppState;

async fn my_stats(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stats = player_stats(app_state.db(), user.id, &app_state.rules).await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(my_stats)));
}
