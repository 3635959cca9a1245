//! Word store: the pool secrets are drawn from.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::words_sea as words_adapter;
use crate::domain::Word;
use crate::entities::words;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub id: i64,
    pub word: Word,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
}

impl TryFrom<words::Model> for WordEntry {
    type Error = DomainError;

    fn try_from(model: words::Model) -> Result<Self, Self::Error> {
        let word = Word::parse(&model.word).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("CorruptWord".into()),
                format!("Stored word {} is malformed: {e}", model.id),
            )
        })?;
        Ok(Self {
            id: model.id,
            word,
            created_at: model.created_at,
        })
    }
}

/// Every word, alphabetical.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<WordEntry>, DomainError> {
    words_adapter::list_all(conn)
        .await?
        .into_iter()
        .map(WordEntry::try_from)
        .collect()
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word_id: i64,
) -> Result<Option<WordEntry>, DomainError> {
    words_adapter::find_by_id(conn, word_id)
        .await?
        .map(WordEntry::try_from)
        .transpose()
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word: Word,
) -> Result<bool, DomainError> {
    Ok(words_adapter::exists(conn, &word.to_string()).await?)
}

/// Insert `word`; an existing entry surfaces as `Conflict(UniqueWord)`.
pub async fn add<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word: Word,
) -> Result<WordEntry, DomainError> {
    let model = words_adapter::insert(conn, word.to_string()).await?;
    WordEntry::try_from(model)
}

pub async fn remove<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    word_id: i64,
) -> Result<(), DomainError> {
    match words_adapter::delete(conn, word_id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::Word,
            format!("Word {word_id} not found"),
        )),
        _ => Ok(()),
    }
}
