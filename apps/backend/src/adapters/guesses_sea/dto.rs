//! DTOs for guesses_sea adapter.

#[derive(Debug, Clone)]
pub struct GuessCreate {
    pub user_id: i64,
    pub word_id: Option<i64>,
    pub guess_word: String,
    pub attempt_no: i16,
    pub played_at: time::OffsetDateTime,
}
