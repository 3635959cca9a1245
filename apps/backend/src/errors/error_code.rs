//! Error codes for the Guessword backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Access denied
    Forbidden,
    /// Token subject has no user row
    ForbiddenUserNotFound,
    /// Admin flag required
    AdminRequired,

    // Request Validation
    /// Guess is not 5 ASCII letters
    InvalidGuess,
    /// Admin-entered word is not 5 ASCII letters
    InvalidWord,
    /// Invalid email address
    InvalidEmail,
    /// Invalid Google sub provided
    InvalidGoogleSub,
    /// Path parameter is not a valid id
    InvalidId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    UserNotFound,
    WordNotFound,
    NotFound,

    // Game rule conflicts
    /// Same word already guessed in this round
    DuplicateGuess,
    /// No open round for this player
    NoActiveRound,
    /// Word list is empty
    NoWordsAvailable,
    /// Player used up today's rounds
    DailyLimitReached,

    // Uniqueness conflicts
    UniqueEmail,
    /// Email already linked to a different Google account
    GoogleSubMismatch,
    WordExists,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            Self::AdminRequired => "ADMIN_REQUIRED",

            Self::InvalidGuess => "INVALID_GUESS",
            Self::InvalidWord => "INVALID_WORD",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidGoogleSub => "INVALID_GOOGLE_SUB",
            Self::InvalidId => "INVALID_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::WordNotFound => "WORD_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateGuess => "DUPLICATE_GUESS",
            Self::NoActiveRound => "NO_ACTIVE_ROUND",
            Self::NoWordsAvailable => "NO_WORDS_AVAILABLE",
            Self::DailyLimitReached => "DAILY_LIMIT_REACHED",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::GoogleSubMismatch => "GOOGLE_SUB_MISMATCH",
            Self::WordExists => "WORD_EXISTS",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
