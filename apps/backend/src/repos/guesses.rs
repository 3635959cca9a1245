//! Guess store: one row per accepted guess.

use sea_orm::ConnectionTrait;

use crate::adapters::guesses_sea::{self as guesses_adapter, GuessCreate};
use crate::domain::Word;
use crate::errors::domain::DomainError;

pub async fn append<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    word_id: Option<i64>,
    guess: Word,
    attempt_no: u8,
    played_at: time::OffsetDateTime,
) -> Result<(), DomainError> {
    guesses_adapter::insert(
        conn,
        GuessCreate {
            user_id,
            word_id,
            guess_word: guess.to_string(),
            attempt_no: i16::from(attempt_no),
            played_at,
        },
    )
    .await?;
    Ok(())
}

pub async fn count_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, DomainError> {
    Ok(guesses_adapter::count_for_user(conn, user_id).await?)
}
