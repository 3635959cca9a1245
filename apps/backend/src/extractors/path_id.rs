use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

fn parse_id(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Missing id parameter"))?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Invalid id: {raw}"),
        )),
    }
}

impl FromRequest for PathId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req.match_info().get("id")).map(PathId))
    }
}
