use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::Word;
use crate::errors::domain::DomainError;
use crate::repos::words::{self, WordEntry};

/// Built-in sample list inserted by the admin seed endpoint.
pub const SEED_WORDS: [&str; 20] = [
    "APPLE", "BRAIN", "CHAIR", "DELTA", "EAGLE", "FAITH", "GIANT", "HOUSE", "INPUT", "JOKER",
    "KNIFE", "LIGHT", "MONEY", "NURSE", "OCEAN", "PLANT", "QUEEN", "ROBOT", "SUGAR", "TIGER",
];

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<WordEntry>, DomainError> {
    words::list_all(conn).await
}

/// Validate and insert one word (`InvalidWord`, `UniqueWord`).
pub async fn add<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    raw: &str,
) -> Result<WordEntry, DomainError> {
    let word = Word::parse_entry(raw)?;
    let entry = words::add(conn, word).await?;
    info!(word_id = entry.id, word = %entry.word, "word added");
    Ok(entry)
}

pub async fn remove<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word_id: i64,
) -> Result<(), DomainError> {
    words::remove(conn, word_id).await?;
    info!(word_id, "word removed");
    Ok(())
}

/// Insert every [`SEED_WORDS`] entry not already present; returns how many
/// were added.
pub async fn seed<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<usize, DomainError> {
    let mut added = 0;
    for raw in SEED_WORDS {
        let word = Word::parse_entry(raw)?;
        if !words::exists(conn, word).await? {
            words::add(conn, word).await?;
            added += 1;
        }
    }
    info!(added, total = SEED_WORDS.len(), "word list seeded");
    Ok(added)
}
