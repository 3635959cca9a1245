//! Domain layer: pure game logic, no HTTP or database types.

pub mod day;
pub mod feedback;
pub mod round;
pub mod stats;
pub mod word;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_feedback;

pub use feedback::{score, score_bytes, Feedback, LetterFeedback, Marker};
pub use round::{FinishedRound, GuessOutcome, GuessRecord, Round, RoundRules, RoundState};
pub use word::{Word, WORD_LEN};
