//! Match configuration.
//!
//! - `MatchConfig`: winning threshold and the double-on-six rule
//! - `Difficulty`: named presets for the two settings
//! - `MatchOverrides`: per-reset tweaks layered over the base config

use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Winning score used when nothing else is configured.
pub const DEFAULT_WINNING_SCORE: u32 = 50;

const fn threshold(score: u32) -> NonZeroU32 {
    match NonZeroU32::new(score) {
        Some(score) => score,
        None => panic!("winning score must be positive"),
    }
}

const EASY_SCORE: NonZeroU32 = threshold(30);
const MEDIUM_SCORE: NonZeroU32 = threshold(DEFAULT_WINNING_SCORE);
const HARD_SCORE: NonZeroU32 = threshold(100);

/// Rules a match is played under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Banked total at or above which the banking player wins.
    pub winning_score: NonZeroU32,

    /// A rolled 6 adds its face value twice.
    pub double_on_six: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: MEDIUM_SCORE,
            double_on_six: false,
        }
    }
}

impl MatchConfig {
    /// Create a config with the given threshold and no special rules.
    pub fn new(winning_score: u32) -> Result<Self, ConfigError> {
        Ok(Self::default().with_winning_score(
            NonZeroU32::new(winning_score).ok_or(ConfigError::ZeroWinningScore)?,
        ))
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, winning_score: NonZeroU32) -> Self {
        self.winning_score = winning_score;
        self
    }

    /// Enable or disable doubling on a rolled 6.
    #[must_use]
    pub fn with_double_on_six(mut self, enabled: bool) -> Self {
        self.double_on_six = enabled;
        self
    }

    /// Layer overrides on top of this config.
    #[must_use]
    pub fn apply(self, overrides: MatchOverrides) -> Self {
        Self {
            winning_score: overrides.winning_score.unwrap_or(self.winning_score),
            double_on_six: overrides.double_on_six.unwrap_or(self.double_on_six),
        }
    }
}

/// Difficulty presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Short match to 30.
    Easy,
    /// Standard match to 50.
    #[default]
    Medium,
    /// Long match to 100 with sixes doubled.
    Hard,
}

impl Difficulty {
    /// The rules this preset plays under.
    #[must_use]
    pub fn config(self) -> MatchConfig {
        let (score, double_on_six) = match self {
            Difficulty::Easy => (EASY_SCORE, false),
            Difficulty::Medium => (MEDIUM_SCORE, false),
            Difficulty::Hard => (HARD_SCORE, true),
        };
        MatchConfig::default()
            .with_winning_score(score)
            .with_double_on_six(double_on_six)
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Optional settings applied when a match is reset.
///
/// Unset fields keep the engine's base config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOverrides {
    pub winning_score: Option<NonZeroU32>,
    pub double_on_six: Option<bool>,
}

impl MatchOverrides {
    /// No overrides.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Override the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, winning_score: NonZeroU32) -> Self {
        self.winning_score = Some(winning_score);
        self
    }

    /// Override the double-on-six rule.
    #[must_use]
    pub fn with_double_on_six(mut self, enabled: bool) -> Self {
        self.double_on_six = Some(enabled);
        self
    }
}

impl From<MatchConfig> for MatchOverrides {
    fn from(config: MatchConfig) -> Self {
        Self {
            winning_score: Some(config.winning_score),
            double_on_six: Some(config.double_on_six),
        }
    }
}
