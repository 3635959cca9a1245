//! Pure aggregation over completed rounds: streaks, win rate, ranking.

use std::cmp::Ordering;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    /// Wins at the end of the history, uninterrupted by a loss
    pub current: u32,
    pub max: u32,
}

/// Win streaks over outcomes ordered oldest first.
pub fn streaks(outcomes: impl IntoIterator<Item = bool>) -> Streaks {
    outcomes
        .into_iter()
        .fold(Streaks::default(), |mut acc, won| {
            if won {
                acc.current += 1;
                acc.max = acc.max.max(acc.current);
            } else {
                acc.current = 0;
            }
            acc
        })
}

/// Whole-percent win rate, rounded half up; 0 when nothing was played.
pub fn win_pct(wins: u64, played: u64) -> u32 {
    if played == 0 {
        return 0;
    }
    ((wins * 200 + played) / (played * 2)) as u32
}

/// Aggregated results for one player, input to [`rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub user_id: i64,
    pub played: u64,
    pub wins: u64,
    pub total_attempts: u64,
}

impl Standing {
    /// Ordering: more wins, then higher win rate, then fewer attempts per
    /// round, then lower user id.
    fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .wins
            .cmp(&self.wins)
            // wins/played, compared without division
            .then_with(|| (other.wins * self.played).cmp(&(self.wins * other.played)))
            .then_with(|| {
                (self.total_attempts * other.played).cmp(&(other.total_attempts * self.played))
            })
            .then_with(|| self.user_id.cmp(&other.user_id))
    }
}

/// Sort standings best first and assign 1-based ranks; equal records share a rank.
pub fn rank(mut standings: Vec<Standing>) -> Vec<(u32, Standing)> {
    standings.sort_by(Standing::cmp_rank);

    let mut ranked: Vec<(u32, Standing)> = Vec::with_capacity(standings.len());
    for (i, s) in standings.into_iter().enumerate() {
        let position = match ranked.last() {
            Some((prev_rank, prev)) if same_record(prev, &s) => *prev_rank,
            _ => i as u32 + 1,
        };
        ranked.push((position, s));
    }
    ranked
}

fn same_record(a: &Standing, b: &Standing) -> bool {
    a.wins == b.wins
        && a.wins * b.played == b.wins * a.played
        && a.total_attempts * b.played == b.total_attempts * a.played
}
