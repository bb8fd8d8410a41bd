//! # pig-engine
//!
//! Rule engine for Pig, the two-player dice game: roll to build up a
//! pending score, hold to bank it, lose it all on a 1. The first player to
//! bank the winning score takes the match.
//!
//! ## Design Principles
//!
//! 1. **Single Mutator**: `TurnEngine` owns the `MatchState`; everything
//!    else reads snapshots.
//!
//! 2. **Injected Randomness**: faces come from a `DiceSource`, so tests
//!    script exact sequences and replays reuse a seed.
//!
//! 3. **Observers, Not Callbacks**: renderers, statistics and persistence
//!    subscribe to `MatchEvent`s and never reach into the engine.
//!
//! ## Modules
//!
//! - `core`: players, configuration, dice, history, match state
//! - `rules`: the turn engine and its outcomes
//! - `events`: match events and sinks
//! - `stats`: statistics aggregated from events

pub mod core;
pub mod rules;
pub mod events;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerPair,
    DiceSource, GameRng, ScriptedDice,
    Difficulty, MatchConfig, MatchOverrides,
    ConfigError, DiceError,
    History, HistoryEntry, HistoryKind,
    MatchState,
};

pub use crate::rules::{EngineError, HoldOutcome, Rejection, RollOutcome, TurnEngine};

pub use crate::events::{EventKind, EventLog, EventSink, MatchEvent, TracingSink};

pub use crate::stats::MatchStats;
