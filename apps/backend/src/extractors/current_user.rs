use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::users;
use crate::state::app_state::AppState;

/// Authenticated player, resolved from the bearer claims that `JwtExtract`
/// stored in request extensions.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub sub: String,
    pub email: String,
    pub username: Option<String>,
    pub is_admin: bool,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let claims = req
                .extensions()
                .get::<Claims>()
                .cloned()
                .ok_or_else(AppError::unauthorized_missing_bearer)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let user = users::find_user_by_sub(app_state.db(), &claims.sub)
                .await?
                .ok_or_else(|| {
                    AppError::forbidden(
                        ErrorCode::ForbiddenUserNotFound,
                        "No user exists for this token",
                    )
                })?;

            // The admin flag is read from the row so revocations apply immediately.
            Ok(CurrentUser {
                id: user.id,
                sub: claims.sub,
                email: claims.email,
                username: user.username,
                is_admin: user.is_admin,
            })
        })
    }
}
