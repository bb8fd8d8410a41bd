//! Match state.
//!
//! `MatchState` is read-only outside the crate: every field is reachable
//! through an accessor, but only the turn engine can change it. Callers
//! receive clones via `TurnEngine::snapshot`, which are cheap because the
//! history log is a persistent vector.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::history::{History, HistoryEntry};
use super::player::{PlayerId, PlayerPair};

/// Authoritative state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    scores: PlayerPair<u32>,
    pending_score: u32,
    active_player: PlayerId,
    round_number: u32,
    rolls_this_turn: PlayerPair<u32>,
    is_active: bool,
    config: MatchConfig,
    history: History,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl MatchState {
    /// Fresh match: zero scores, player 0 to move, round 1.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            scores: PlayerPair::default(),
            pending_score: 0,
            active_player: PlayerId::FIRST,
            round_number: 1,
            rolls_this_turn: PlayerPair::default(),
            is_active: true,
            config,
            history: History::default(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    // === Accessors ===

    /// Banked totals for both players.
    #[must_use]
    pub fn scores(&self) -> [u32; 2] {
        self.scores.into_array()
    }

    /// Banked total for one player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Points accumulated this turn and not yet banked.
    #[must_use]
    pub fn pending_score(&self) -> u32 {
        self.pending_score
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Starts at 1 and increments on every change of turn.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Rolls taken since the player's current turn began.
    #[must_use]
    pub fn rolls_this_turn(&self, player: PlayerId) -> u32 {
        self.rolls_this_turn[player]
    }

    /// False once a player has banked a winning total.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.config.winning_score.get()
    }

    #[must_use]
    pub fn double_on_six(&self) -> bool {
        self.config.double_on_six
    }

    /// Rules this match is being played under.
    #[must_use]
    pub fn config(&self) -> MatchConfig {
        self.config
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// When the match began.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the winning hold landed, if it has.
    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Time from the start of the match to its end, or to now while it is
    /// still being played.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let end = self.finished_at.unwrap_or_else(Utc::now);
        (end - self.started_at).to_std().unwrap_or_default()
    }

    /// The winner, if the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_active {
            return None;
        }
        PlayerId::all().find(|&p| self.scores[p] >= self.winning_score())
    }

    // === Mutation (engine only) ===

    pub(crate) fn add_pending(&mut self, points: u32) {
        self.pending_score = self.pending_score.saturating_add(points);
    }

    pub(crate) fn count_roll(&mut self) {
        self.rolls_this_turn[self.active_player] += 1;
    }

    /// Move pending points into the active player's score and return the new total.
    pub(crate) fn bank_pending(&mut self) -> u32 {
        let total = self.scores[self.active_player].saturating_add(self.pending_score);
        self.scores[self.active_player] = total;
        total
    }

    /// Discard pending points and hand the turn to the opponent.
    pub(crate) fn pass_turn(&mut self) {
        self.pending_score = 0;
        self.rolls_this_turn[self.active_player] = 0;
        self.active_player = self.active_player.other();
        self.round_number += 1;
    }

    pub(crate) fn finish(&mut self) {
        self.is_active = false;
        self.finished_at = Some(Utc::now());
    }

    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
