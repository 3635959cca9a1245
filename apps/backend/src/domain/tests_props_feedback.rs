//! Property tests for the feedback engine and round machine (pure domain, no DB).
//!
//! Properties:
//! - Exactly five markers, in guess order, carrying the guess letters
//! - Exact marker iff the letters at that index are equal
//! - Exact + Present per letter never exceeds that letter's count in the secret
//! - Scoring is deterministic
//! - A word scored against itself is solved; solved implies equal words
//! - Duplicate guesses never advance the round

use proptest::prelude::*;
use time::macros::date;

use crate::domain::feedback::{score, score_bytes, Marker};
use crate::domain::round::{Round, RoundRules, RoundState};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_letters_follow_guess_order(
        guess in test_gens::word(),
        secret in test_gens::word(),
    ) {
        let fb = score(&guess, &secret);
        let letters: Vec<char> = fb.letters().iter().map(|l| l.letter).collect();
        let expected: Vec<char> = guess.letters().collect();
        prop_assert_eq!(letters, expected);
    }

    #[test]
    fn prop_exact_iff_same_letter(
        guess in test_gens::word_small_alphabet(),
        secret in test_gens::word_small_alphabet(),
    ) {
        let fb = score(&guess, &secret);
        for i in 0..5 {
            let same = guess.as_bytes()[i] == secret.as_bytes()[i];
            prop_assert_eq!(fb.letters()[i].marker == Marker::Exact, same);
        }
    }

    #[test]
    fn prop_marked_count_bounded_by_secret(
        guess in test_gens::word_small_alphabet(),
        secret in test_gens::word_small_alphabet(),
    ) {
        let fb = score(&guess, &secret);
        for letter in b'A'..=b'E' {
            let in_secret = secret.as_bytes().iter().filter(|&&b| b == letter).count();
            let in_guess = guess.as_bytes().iter().filter(|&&b| b == letter).count();
            let marked = fb
                .letters()
                .iter()
                .filter(|l| l.letter == letter as char && l.marker != Marker::Absent)
                .count();
            prop_assert!(marked <= in_secret);
            // every occurrence the secret can cover is covered
            prop_assert_eq!(marked, in_secret.min(in_guess));
        }
    }

    #[test]
    fn prop_scoring_is_pure(
        guess in test_gens::word(),
        secret in test_gens::word(),
    ) {
        prop_assert_eq!(score(&guess, &secret), score(&guess, &secret));
    }

    #[test]
    fn prop_solved_iff_equal(
        guess in test_gens::word_small_alphabet(),
        secret in test_gens::word_small_alphabet(),
    ) {
        prop_assert!(score(&secret, &secret).is_solved());
        prop_assert_eq!(score(&guess, &secret).is_solved(), guess == secret);
    }

    #[test]
    fn prop_raw_bytes_distinguish_case(
        guess in test_gens::raw_letters(),
        secret in test_gens::raw_letters(),
    ) {
        let fb = score_bytes(&guess, &secret);
        for i in 0..5 {
            if guess[i] != secret[i] {
                prop_assert_ne!(fb.letters()[i].marker, Marker::Exact);
            }
        }
    }

    #[test]
    fn prop_duplicate_never_advances(
        secret in test_gens::word(),
        guess in test_gens::word(),
    ) {
        let rules = RoundRules::default();
        let round = Round::open(secret, 1, date!(2025 - 01 - 01));
        let out = round.guess(guess, &rules).unwrap();
        if let RoundState::InProgress(next) = out.next {
            prop_assert!(next.guess(guess, &rules).is_err());
            prop_assert_eq!(next.attempts(), 1);
        } else {
            prop_assert_eq!(guess, secret);
        }
    }
}
