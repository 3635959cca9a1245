//! Validated five-letter words.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

use crate::errors::domain::{DomainError, ValidationKind};

pub const WORD_LEN: usize = 5;

/// Five uppercase ASCII letters. Every value has been through [`Word::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {WORD_LEN} letters A-Z, got {0:?}")]
pub struct WordFormatError(pub String);

impl Word {
    /// Trim, NFKC-normalize and uppercase `input`, then require exactly five
    /// ASCII letters.
    pub fn parse(input: &str) -> Result<Self, WordFormatError> {
        let normalized: String = input.trim().nfkc().collect();
        let bytes = normalized.as_bytes();
        if bytes.len() != WORD_LEN || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordFormatError(input.to_string()));
        }
        let mut letters = [0u8; WORD_LEN];
        for (dst, src) in letters.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }

    /// Parse a player's guess; failures consume no attempt.
    pub fn parse_guess(input: &str) -> Result<Self, DomainError> {
        Self::parse(input).map_err(|e| {
            DomainError::validation(
                ValidationKind::InvalidGuessFormat,
                format!("Guess must be exactly {WORD_LEN} letters ({e})"),
            )
        })
    }

    /// Parse a word-list entry.
    pub fn parse_entry(input: &str) -> Result<Self, DomainError> {
        Self::parse(input).map_err(|e| {
            DomainError::validation(
                ValidationKind::InvalidWord,
                format!("Word must be exactly {WORD_LEN} letters ({e})"),
            )
        })
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&b| b as char)
    }
}

impl FromStr for Word {
    type Err = WordFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters().try_for_each(|c| f.write_char(c))
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
