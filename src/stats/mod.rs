//! Match statistics.
//!
//! `MatchStats` is an `EventSink`: subscribe it to a `TurnEngine` and it
//! aggregates wins, streaks and the face distribution without touching the
//! match itself. Storing or displaying the numbers is left to the caller.

pub mod tracker;

pub use tracker::MatchStats;
