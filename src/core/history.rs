//! Match history: a bounded, append-only log of state-changing actions.
//!
//! Backed by an `im::Vector` so snapshots share structure with the live log
//! instead of copying it.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Entries kept before the oldest are dropped.
pub const MAX_HISTORY_ENTRIES: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => panic!("history cap must be positive"),
};

/// What kind of action an entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    /// A die was rolled; `value` is the face.
    Roll,
    /// Pending points were banked; `value` is the amount banked.
    Hold,
    /// The match was won; `value` is the winner's final score.
    Win,
}

/// A recorded action with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: HistoryKind,

    /// The player who acted.
    pub player: PlayerId,

    pub value: u32,

    /// Round number when the action was taken.
    pub round: u32,

    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(kind: HistoryKind, player: PlayerId, value: u32, round: u32) -> Self {
        Self {
            kind,
            player,
            value,
            round,
            timestamp: Utc::now(),
        }
    }
}

/// Capacity-bounded history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vector<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY_ENTRIES)
    }
}

impl History {
    /// Create an empty log holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.get(),
        }
    }

    /// Append an entry, dropping the oldest once over capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
