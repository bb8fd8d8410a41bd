//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats at the table.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`, used for scores and
//! per-turn roll counters.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a match of Pig.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier. Indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who opens every match.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a 0-based index.
    ///
    /// Returns `None` for indices outside the two seats.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PLAYER_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs in seat order.
    ///
    /// ```
    /// use pig_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Seats are shown 1-based, the way the table announces them.
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data for both seats.
///
/// ## Example
///
/// ```
/// use pig_engine::core::{PlayerId, PlayerPair};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::default();
/// scores[PlayerId::SECOND] += 12;
///
/// assert_eq!(scores.into_array(), [0, 12]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit per-seat values.
    pub const fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Consume the pair into a plain array ordered by seat.
    pub fn into_array(self) -> [T; PLAYER_COUNT] {
        self.data
    }
}

impl<T: Clone> PlayerPair<T> {
    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self {
        Self::new(value.clone(), value)
    }
}

impl<T> From<[T; PLAYER_COUNT]> for PlayerPair<T> {
    fn from(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
