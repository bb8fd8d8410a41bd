//! Results of engine operations.
//!
//! Moves the rules do not allow come back as `Rejected` outcomes, not as
//! errors. `EngineError` is reserved for a failing random source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{DiceError, PlayerId};

/// Why a roll or hold was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The match is finished; only a reset is accepted.
    GameNotActive,
    /// Hold requested with zero pending points.
    NothingPending,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::GameNotActive => f.write_str("game not active"),
            Rejection::NothingPending => f.write_str("nothing pending to hold"),
        }
    }
}

/// Result of `TurnEngine::roll_die`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// The face was added; the same player keeps rolling.
    Applied { face: u8, gained: u32, pending: u32 },

    /// A 1 ended the turn and the pending points were lost.
    TurnLost {
        face: u8,
        forfeited: u32,
        next_player: PlayerId,
    },

    Rejected(Rejection),
}

impl RollOutcome {
    /// The face drawn, unless the roll was rejected.
    #[must_use]
    pub fn face(&self) -> Option<u8> {
        match *self {
            RollOutcome::Applied { face, .. } | RollOutcome::TurnLost { face, .. } => Some(face),
            RollOutcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn switched_turn(&self) -> bool {
        matches!(self, RollOutcome::TurnLost { .. })
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match *self {
            RollOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Result of `TurnEngine::hold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldOutcome {
    /// Points banked below the winning score; the turn passed.
    Banked {
        banked: u32,
        total: u32,
        next_player: PlayerId,
    },

    /// Points banked and the match is over.
    Won { winner: PlayerId, score: u32 },

    Rejected(Rejection),
}

impl HoldOutcome {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, HoldOutcome::Won { .. })
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match *self {
            HoldOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Failures inside an engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("random source failed: {0}")]
    Dice(#[from] DiceError),
}
