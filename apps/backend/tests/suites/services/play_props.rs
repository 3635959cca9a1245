//! Property checks over whole rounds against the database.

use backend::domain::{score, Word};
use backend::services::play::{self, RoundStatus};
use backend_test_support::unique_helpers::unique_word;
use proptest::prelude::*;
use time::macros::datetime;

use crate::common::proptest_prelude::proptest_prelude_config;
use crate::support::factory::{create_player, only_word};
use crate::support::test_state::build_test_state;

fn letters() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('A', 'Z'), 5)
        .prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Whatever the guesses, the round ends within the attempt limit and the
    /// feedback returned always matches direct scoring.
    #[test]
    fn round_feedback_matches_scoring(guesses in proptest::collection::vec(letters(), 1..8)) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let state = build_test_state().await.expect("state");
            let secret_raw = unique_word();
            only_word(&state, &secret_raw).await;
            let secret = Word::parse(&secret_raw).unwrap();
            let player = create_player(&state, false).await;
            let uid = player.user.id;
            let now = datetime!(2026-03-10 12:00 UTC);

            play::start_round(&state, uid, now).await.unwrap();
            let mut seen = Vec::new();
            let mut finished = false;
            for raw in &guesses {
                let word = Word::parse(raw).unwrap();
                let res = play::submit_guess(&state, uid, raw, now).await;
                if finished {
                    prop_assert!(res.is_err());
                    continue;
                }
                if seen.contains(&word) {
                    prop_assert!(res.is_err());
                    continue;
                }
                let res = res.unwrap();
                seen.push(word);
                prop_assert_eq!(res.feedback, score(&word, &secret));
                prop_assert_eq!(usize::from(res.attempt_no), seen.len());
                prop_assert!(seen.len() <= usize::from(state.rules.max_attempts));
                finished = res.status != RoundStatus::InProgress;
                if word == secret {
                    prop_assert_eq!(res.status, RoundStatus::Won);
                }
            }
            Ok(())
        })?;
    }
}
