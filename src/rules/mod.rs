//! Rules of Pig.
//!
//! `TurnEngine` is the only code allowed to change a `MatchState`:
//! - which player is to move
//! - how a rolled face changes the pending score
//! - when a turn ends, voluntarily or on a 1
//! - when the match is won

pub mod engine;
pub mod outcome;

pub use engine::TurnEngine;
pub use outcome::{EngineError, HoldOutcome, Rejection, RollOutcome};
