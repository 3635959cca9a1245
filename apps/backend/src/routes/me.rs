use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::CurrentUser;

async fn me(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(me)));
}
