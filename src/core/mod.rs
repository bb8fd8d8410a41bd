//! Core match types: players, configuration, dice, history, state.
//!
//! Everything here is passive data plus the `DiceSource` seam. The rules
//! that move a match forward live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod history;
pub mod state;

pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::{DiceSource, GameRng, ScriptedDice, DIE_FACES, FORFEIT_FACE};
pub use config::{Difficulty, MatchConfig, MatchOverrides, DEFAULT_WINNING_SCORE};
pub use error::{ConfigError, DiceError};
pub use history::{History, HistoryEntry, HistoryKind, MAX_HISTORY_ENTRIES};
pub use state::MatchState;
