//! Cross-match statistics built purely from engine events.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair, DIE_FACES};
use crate::events::{EventKind, EventSink, MatchEvent};

/// Statistics accumulated over any number of matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Matches that ended in a win.
    pub games_played: u32,

    pub wins: PlayerPair<u32>,

    /// Consecutive wins, reset when the other player wins.
    pub current_win_streak: PlayerPair<u32>,

    pub longest_win_streak: PlayerPair<u32>,

    /// Highest banked total seen after any hold.
    pub highest_score: u32,

    /// How often each face came up, indexed by `face - 1`.
    pub face_counts: [u64; DIE_FACES as usize],

    /// Rolls across every match, finished or not.
    pub total_rolls: u64,

    /// Rolls in matches that reached a winner.
    pub rolls_in_finished_games: u64,

    /// Fewest rounds any match took to produce a winner.
    pub fewest_rounds_to_win: Option<u32>,

    /// Summed duration of every finished match.
    pub total_game_time: Duration,

    /// Shortest time any match took to produce a winner.
    pub fastest_win: Option<Duration>,

    /// When the most recent match was won.
    pub last_played: Option<DateTime<Utc>>,

    /// Events seen, by kind.
    pub event_counts: FxHashMap<EventKind, u64>,

    rolls_this_match: u64,
}

impl MatchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Times `face` was rolled. Zero for faces not on the die.
    #[must_use]
    pub fn face_count(&self, face: u8) -> u64 {
        match face {
            1..=DIE_FACES => self.face_counts[usize::from(face - 1)],
            _ => 0,
        }
    }

    /// Average rolls per finished match.
    #[must_use]
    pub fn average_rolls_per_game(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.rolls_in_finished_games as f64 / f64::from(self.games_played)
        }
    }

    /// Mean duration of a finished match.
    #[must_use]
    pub fn average_game_duration(&self) -> Duration {
        if self.games_played == 0 {
            Duration::ZERO
        } else {
            self.total_game_time / self.games_played
        }
    }

    /// Share of finished matches won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / f64::from(self.games_played)
        }
    }

    #[must_use]
    pub fn event_count(&self, kind: EventKind) -> u64 {
        self.event_counts.get(&kind).copied().unwrap_or(0)
    }

    fn record_face(&mut self, face: u8) {
        if (1..=DIE_FACES).contains(&face) {
            self.face_counts[usize::from(face - 1)] += 1;
        }
        self.total_rolls += 1;
        self.rolls_this_match += 1;
    }

    fn record_win(&mut self, winner: PlayerId, round: u32, duration: Duration) {
        self.games_played += 1;
        self.wins[winner] += 1;
        self.current_win_streak[winner] += 1;
        self.current_win_streak[winner.other()] = 0;
        self.longest_win_streak[winner] =
            self.longest_win_streak[winner].max(self.current_win_streak[winner]);
        self.fewest_rounds_to_win = Some(
            self.fewest_rounds_to_win
                .map_or(round, |fewest| fewest.min(round)),
        );
        self.total_game_time += duration;
        self.fastest_win = Some(self.fastest_win.map_or(duration, |fastest| fastest.min(duration)));
        self.last_played = Some(Utc::now());
        self.rolls_in_finished_games += self.rolls_this_match;
        self.rolls_this_match = 0;
    }
}

impl EventSink for MatchStats {
    fn notify(&mut self, event: &MatchEvent) {
        *self.event_counts.entry(event.kind()).or_insert(0) += 1;

        match *event {
            MatchEvent::Reset { .. } => self.rolls_this_match = 0,
            MatchEvent::RollApplied { face, .. } | MatchEvent::TurnLost { face, .. } => {
                self.record_face(face);
            }
            MatchEvent::Held { total, .. } => {
                self.highest_score = self.highest_score.max(total);
            }
            MatchEvent::GameWon {
                winner,
                round,
                duration,
                ..
            } => self.record_win(winner, round, duration),
            MatchEvent::PlayerSwitched { .. } => {}
        }
    }
}
