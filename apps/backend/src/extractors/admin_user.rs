use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use super::current_user::CurrentUser;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Guard for admin handlers: a [`CurrentUser`] whose row carries the admin
/// flag, otherwise 403 `ADMIN_REQUIRED`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl Deref for AdminUser {
    type Target = CurrentUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user = CurrentUser::from_request(req, payload);
        Box::pin(async move {
            let user = user.await?;
            if !user.is_admin {
                tracing::warn!(user_id = user.id, "admin route refused");
                return Err(AppError::forbidden(
                    ErrorCode::AdminRequired,
                    "Administrator access required",
                ));
            }
            Ok(AdminUser(user))
        })
    }
}
