//! Error types for the random source and match configuration.
//!
//! Rejected moves (rolling after the match is over, holding with nothing
//! pending) are not errors; see `rules::Rejection`.

use thiserror::Error;

/// The random source could not produce a face.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A scripted sequence ran out of faces.
    #[error("dice script exhausted after {drawn} faces")]
    Exhausted { drawn: usize },

    /// A face outside `1..=6` was produced.
    #[error("die face {face} is outside 1..=6")]
    FaceOutOfRange { face: u8 },
}

/// Invalid match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A winning score of zero would end every match before it starts.
    #[error("winning score must be positive")]
    ZeroWinningScore,

    /// A difficulty preset name that is not `easy`, `medium` or `hard`.
    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}
