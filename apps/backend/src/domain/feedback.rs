//! Per-letter scoring of a guess against the secret word.
//!
//! Two passes over a remaining-letter budget built from the secret: exact
//! matches first, then present-elsewhere markers while budget remains. A
//! letter is never marked more often than it occurs in the secret.

use std::collections::BTreeMap;

use serde::Serialize;

use super::word::{Word, WORD_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Absent,
    Present,
    Exact,
}

impl Marker {
    pub fn emoji(self) -> char {
        match self {
            Marker::Exact => '🟩',
            Marker::Present => '🟨',
            Marker::Absent => '⬜',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterFeedback {
    pub letter: char,
    pub marker: Marker,
}

/// Exactly five markers, in guess order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Feedback([LetterFeedback; WORD_LEN]);

impl Feedback {
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|l| l.marker == Marker::Exact)
    }

    pub fn letters(&self) -> &[LetterFeedback; WORD_LEN] {
        &self.0
    }

    pub fn markers(&self) -> [Marker; WORD_LEN] {
        self.0.map(|l| l.marker)
    }

    /// Share-text row such as `🟩🟨⬜⬜🟩`.
    pub fn emoji_row(&self) -> String {
        self.0.iter().map(|l| l.marker.emoji()).collect()
    }
}

/// Score a validated guess against a validated secret.
pub fn score(guess: &Word, secret: &Word) -> Feedback {
    score_bytes(guess.as_bytes(), secret.as_bytes())
}

/// Raw-symbol scoring; no case folding, so `b'a'` and `b'A'` are distinct.
pub fn score_bytes(guess: &[u8; WORD_LEN], secret: &[u8; WORD_LEN]) -> Feedback {
    let mut remaining = [0u8; 256];
    for &b in secret {
        remaining[b as usize] += 1;
    }

    let mut markers = [Marker::Absent; WORD_LEN];
    for i in 0..WORD_LEN {
        if guess[i] == secret[i] {
            markers[i] = Marker::Exact;
            remaining[guess[i] as usize] -= 1;
        }
    }
    for i in 0..WORD_LEN {
        if markers[i] == Marker::Exact {
            continue;
        }
        let budget = &mut remaining[guess[i] as usize];
        if *budget > 0 {
            markers[i] = Marker::Present;
            *budget -= 1;
        }
    }

    Feedback(std::array::from_fn(|i| LetterFeedback {
        letter: guess[i] as char,
        marker: markers[i],
    }))
}

/// Best marker seen per letter across a round's feedback (on-screen keyboard).
pub fn keyboard_hints<'a>(history: impl IntoIterator<Item = &'a Feedback>) -> BTreeMap<char, Marker> {
    let mut hints = BTreeMap::new();
    for feedback in history {
        for l in feedback.letters() {
            hints
                .entry(l.letter)
                .and_modify(|m: &mut Marker| *m = (*m).max(l.marker))
                .or_insert(l.marker);
        }
    }
    hints
}
