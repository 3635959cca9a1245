//! One round of play as a value-level state machine.
//!
//! `NoRound -> InProgress -> Won | Lost`. [`Round::guess`] never mutates its
//! receiver; callers swap in the returned state once persistence succeeded.

use time::Date;

use super::feedback::{score, Feedback};
use super::word::Word;
use crate::errors::domain::{ConflictKind, DomainError};

/// Round limits. Defaults: 5 guesses per round, 3 rounds per UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub max_attempts: u8,
    pub daily_rounds: u32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            daily_rounds: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// An open round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    secret: Word,
    word_id: i64,
    history: Vec<GuessRecord>,
    opened_on: Date,
}

/// A round that ended; carries what the game record needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedRound {
    pub secret: Word,
    pub word_id: i64,
    pub history: Vec<GuessRecord>,
    pub won: bool,
    pub opened_on: Date,
}

impl FinishedRound {
    pub fn attempts(&self) -> u8 {
        self.history.len() as u8
    }

    /// Wordle-style share text, e.g. `Guessword 3/5` followed by emoji rows.
    pub fn share_text(&self, rules: &RoundRules) -> String {
        let score = if self.won {
            self.attempts().to_string()
        } else {
            "X".to_string()
        };
        let mut out = format!("Guessword {score}/{}", rules.max_attempts);
        for rec in &self.history {
            out.push('\n');
            out.push_str(&rec.feedback.emoji_row());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundState {
    InProgress(Round),
    Won(FinishedRound),
    Lost(FinishedRound),
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::InProgress(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    /// 1-based position of this guess within the round
    pub attempt_no: u8,
    pub next: RoundState,
}

impl Round {
    pub fn open(secret: Word, word_id: i64, opened_on: Date) -> Self {
        Self {
            secret,
            word_id,
            history: Vec::new(),
            opened_on,
        }
    }

    pub fn secret(&self) -> Word {
        self.secret
    }

    pub fn word_id(&self) -> i64 {
        self.word_id
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn attempts(&self) -> u8 {
        self.history.len() as u8
    }

    pub fn attempts_left(&self, rules: &RoundRules) -> u8 {
        rules.max_attempts.saturating_sub(self.attempts())
    }

    pub fn opened_on(&self) -> Date {
        self.opened_on
    }

    /// Apply one guess. A repeated guess is rejected without consuming an
    /// attempt; a correct guess wins even when it is the last allowed one.
    pub fn guess(&self, guess: Word, rules: &RoundRules) -> Result<GuessOutcome, DomainError> {
        if self.attempts() >= rules.max_attempts {
            return Err(DomainError::conflict(
                ConflictKind::NoActiveRound,
                "Round has no attempts left",
            ));
        }
        if self.history.iter().any(|r| r.guess == guess) {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateGuess,
                format!("{guess} was already guessed this round"),
            ));
        }

        let feedback = score(&guess, &self.secret);
        let mut history = self.history.clone();
        history.push(GuessRecord { guess, feedback });
        let attempt_no = history.len() as u8;

        let next = if feedback.is_solved() {
            RoundState::Won(self.finish(history, true))
        } else if attempt_no >= rules.max_attempts {
            RoundState::Lost(self.finish(history, false))
        } else {
            RoundState::InProgress(Round {
                secret: self.secret,
                word_id: self.word_id,
                history,
                opened_on: self.opened_on,
            })
        };

        Ok(GuessOutcome {
            feedback,
            attempt_no,
            next,
        })
    }

    fn finish(&self, history: Vec<GuessRecord>, won: bool) -> FinishedRound {
        FinishedRound {
            secret: self.secret,
            word_id: self.word_id,
            history,
            won,
            opened_on: self.opened_on,
        }
    }
}
