// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::word::{Word, WORD_LEN};

/// Uppercase letters from a small alphabet so repeats are common.
pub fn word_small_alphabet() -> impl Strategy<Value = Word> {
    proptest::collection::vec(prop::sample::select(b"ABCDE".to_vec()), WORD_LEN)
        .prop_map(|bytes| word_from(&bytes))
}

/// Any uppercase word.
pub fn word() -> impl Strategy<Value = Word> {
    "[A-Z]{5}".prop_map(|s| Word::parse(&s).expect("generated words are valid"))
}

/// Raw bytes drawn from letters of both cases.
pub fn raw_letters() -> impl Strategy<Value = [u8; WORD_LEN]> {
    proptest::array::uniform5(prop::sample::select(b"aAbBcC".to_vec()))
}

fn word_from(bytes: &[u8]) -> Word {
    let s = String::from_utf8(bytes.to_vec()).expect("ascii");
    Word::parse(&s).expect("generated words are valid")
}
