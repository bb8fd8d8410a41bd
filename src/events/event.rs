//! Match events.
//!
//! The engine fires one of these for every state transition. Observers
//! (renderers, statistics, persistence) react to them; none of them can
//! reach back into the engine's state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, PlayerId};

/// Discriminant of a `MatchEvent`, usable as a map key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Reset,
    RollApplied,
    TurnLost,
    Held,
    PlayerSwitched,
    GameWon,
}

impl EventKind {
    /// All kinds in firing order within a turn.
    pub const ALL: [EventKind; 6] = [
        EventKind::Reset,
        EventKind::RollApplied,
        EventKind::TurnLost,
        EventKind::Held,
        EventKind::PlayerSwitched,
        EventKind::GameWon,
    ];

    /// Stable kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Reset => "reset",
            EventKind::RollApplied => "roll-applied",
            EventKind::TurnLost => "turn-lost",
            EventKind::Held => "held",
            EventKind::PlayerSwitched => "player-switched",
            EventKind::GameWon => "game-won",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A state transition with the data observers need to render it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum MatchEvent {
    /// A new match began under `config`.
    Reset { config: MatchConfig },

    /// A non-forfeit face was added to the pending score.
    RollApplied {
        player: PlayerId,
        face: u8,
        /// Points added, which is twice the face for a doubled six.
        gained: u32,
        pending: u32,
    },

    /// A 1 was rolled and the pending points are gone.
    TurnLost {
        player: PlayerId,
        face: u8,
        forfeited: u32,
    },

    /// Pending points were banked.
    Held {
        player: PlayerId,
        banked: u32,
        total: u32,
    },

    /// The turn passed to `active`.
    PlayerSwitched { active: PlayerId, round: u32 },

    /// `winner` banked a total at or above the winning score.
    GameWon {
        winner: PlayerId,
        score: u32,
        round: u32,
        /// Time from reset to the winning hold.
        duration: Duration,
    },
}

impl MatchEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            MatchEvent::Reset { .. } => EventKind::Reset,
            MatchEvent::RollApplied { .. } => EventKind::RollApplied,
            MatchEvent::TurnLost { .. } => EventKind::TurnLost,
            MatchEvent::Held { .. } => EventKind::Held,
            MatchEvent::PlayerSwitched { .. } => EventKind::PlayerSwitched,
            MatchEvent::GameWon { .. } => EventKind::GameWon,
        }
    }

    /// Stable kebab-case name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            MatchEvent::Reset { .. } => None,
            MatchEvent::RollApplied { player, .. }
            | MatchEvent::TurnLost { player, .. }
            | MatchEvent::Held { player, .. } => Some(player),
            MatchEvent::PlayerSwitched { active, .. } => Some(active),
            MatchEvent::GameWon { winner, .. } => Some(winner),
        }
    }

    /// The rolled face, for roll events.
    #[must_use]
    pub fn face(&self) -> Option<u8> {
        match *self {
            MatchEvent::RollApplied { face, .. } | MatchEvent::TurnLost { face, .. } => Some(face),
            _ => None,
        }
    }
}
