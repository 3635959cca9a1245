//! Server-side slot holding each player's open round.
//!
//! Every player owns one async mutex. A whole transition (read slot, score,
//! persist, write slot) runs while holding it, so submissions from one player
//! are serialized and different players never contend. Empty slots are
//! dropped from the map once nobody else is waiting on them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use time::Date;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::Round;

type Slot = Arc<Mutex<Option<Round>>>;

#[derive(Debug, Clone, Default)]
pub struct RoundStore {
    slots: Arc<DashMap<i64, Slot>>,
    open: Arc<AtomicUsize>,
}

/// Exclusive access to one player's slot for the duration of a transition.
pub struct RoundSlot {
    user_id: i64,
    guard: OwnedMutexGuard<Option<Round>>,
    slots: Arc<DashMap<i64, Slot>>,
    open: Arc<AtomicUsize>,
}

impl RoundStore {
    /// Lock `user_id`'s slot. A round opened before `today` is dropped first.
    pub async fn lock(&self, user_id: i64, today: Date) -> RoundSlot {
        // Clone the Arc out so the DashMap shard lock is released before awaiting.
        let slot: Slot = self.slots.entry(user_id).or_default().value().clone();
        let guard = slot.lock_owned().await;
        let mut slot = RoundSlot {
            user_id,
            guard,
            slots: Arc::clone(&self.slots),
            open: Arc::clone(&self.open),
        };
        if slot.round().is_some_and(|r| r.opened_on() < today) {
            tracing::debug!(user_id, "discarding round from a previous day");
            slot.clear();
        }
        slot
    }

    /// Number of players with an open round.
    pub fn open_rounds(&self) -> usize {
        self.open.load(Ordering::Acquire)
    }

    /// Number of players currently holding a slot entry.
    pub fn tracked_players(&self) -> usize {
        self.slots.len()
    }
}

impl RoundSlot {
    pub fn round(&self) -> Option<&Round> {
        self.guard.as_ref()
    }

    pub fn set(&mut self, round: Round) {
        if self.guard.replace(round).is_none() {
            self.open.fetch_add(1, Ordering::AcqRel);
        }
    }

    pub fn clear(&mut self) {
        if self.guard.take().is_some() {
            self.open.fetch_sub(1, Ordering::AcqRel);
        }
    }
}

impl Drop for RoundSlot {
    fn drop(&mut self) {
        if self.guard.is_some() {
            return;
        }
        // Two owners means the map and this guard; anyone else is queued on it.
        self.slots
            .remove_if(&self.user_id, |_, slot| Arc::strong_count(slot) == 2);
    }
}
