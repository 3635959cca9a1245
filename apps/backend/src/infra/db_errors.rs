//! SeaORM -> DomainError translation helpers.
//!
//! Repos convert `sea_orm::DbErr` into `DomainError` here; handlers then map
//! `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// `table.column` out of SQLite's "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',')
        .next()
        .filter(|s| !s.is_empty())
}

fn sqlite_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "words.word" => Some((ConflictKind::UniqueWord, "Word already in the list")),
        "user_credentials.email" => Some((ConflictKind::UniqueEmail, "Email already registered")),
        "user_credentials.google_sub" => Some((
            ConflictKind::Other("UniqueGoogleSub".into()),
            "Google account already linked to another user",
        )),
        _ => None,
    }
}

fn postgres_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("words_word_key") {
        return Some((ConflictKind::UniqueWord, "Word already in the list"));
    }
    if error_msg.contains("user_credentials_email_key") {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    if error_msg.contains("user_credentials_google_sub_key") {
        return Some((
            ConflictKind::Other("UniqueGoogleSub".into()),
            "Google account already linked to another user",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some((kind, detail)) = extract_sqlite_table_column(&error_msg)
            .and_then(sqlite_conflict)
            .or_else(|| postgres_conflict(&error_msg))
        {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::infra(
            InfraErrorKind::Other("ForeignKey".into()),
            "Referenced row is missing",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
