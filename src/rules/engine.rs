//! The turn engine: sole mutator of a `MatchState`.
//!
//! A match has two states. **Active** cycles through turns of
//! `roll* -> hold | forfeit`; **Finished** is entered only by a hold that
//! banks a winning total, and is left only through `reset`.
//!
//! Every operation runs to completion before returning. Events are
//! published after the state change they describe.

use tracing::{debug, info, warn};

use crate::core::{
    DiceError, DiceSource, GameRng, HistoryEntry, HistoryKind, MatchConfig, MatchOverrides,
    MatchState, DIE_FACES, FORFEIT_FACE,
};
use crate::events::{EventSink, MatchEvent, Subscribers};

use super::outcome::{EngineError, HoldOutcome, Rejection, RollOutcome};

/// Face that scores double under the hard rule.
const DOUBLED_FACE: u8 = 6;

/// Rules of Pig over one live match.
///
/// ## Example
///
/// ```
/// use pig_engine::core::{MatchConfig, PlayerId, ScriptedDice};
/// use pig_engine::rules::{HoldOutcome, RollOutcome, TurnEngine};
///
/// let dice = ScriptedDice::new([4, 5, 1]);
/// let mut engine = TurnEngine::new(MatchConfig::default(), dice);
///
/// engine.roll_die().unwrap();
/// engine.roll_die().unwrap();
/// assert_eq!(engine.state().pending_score(), 9);
///
/// assert!(matches!(engine.hold(), HoldOutcome::Banked { total: 9, .. }));
/// assert_eq!(engine.state().active_player(), PlayerId::SECOND);
///
/// assert!(matches!(engine.roll_die().unwrap(), RollOutcome::TurnLost { .. }));
/// assert_eq!(engine.state().active_player(), PlayerId::FIRST);
/// ```
#[derive(Debug)]
pub struct TurnEngine<D = GameRng> {
    state: MatchState,
    base_config: MatchConfig,
    dice: D,
    subscribers: Subscribers,
}

impl<D: DiceSource> TurnEngine<D> {
    /// Create an engine with a fresh match under `config`.
    ///
    /// No `reset` event is published: there are no subscribers yet.
    #[must_use]
    pub fn new(config: MatchConfig, dice: D) -> Self {
        Self {
            state: MatchState::new(config),
            base_config: config,
            dice,
            subscribers: Subscribers::new(),
        }
    }

    /// Register a sink for all subsequent events.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.subscribers.subscribe(Box::new(sink));
    }

    /// Read access to the live match.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the live match for rendering or persistence.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Config that `reset` layers its overrides onto.
    #[must_use]
    pub fn base_config(&self) -> MatchConfig {
        self.base_config
    }

    /// Replace the base config. Takes effect at the next `reset`.
    pub fn set_base_config(&mut self, config: MatchConfig) {
        self.base_config = config;
    }

    /// Mutable access to the random source, e.g. to extend a script.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.state.is_active()
    }

    #[must_use]
    pub fn can_hold(&self) -> bool {
        self.state.is_active() && self.state.pending_score() > 0
    }

    /// Start a new match, discarding the current one whatever its state.
    pub fn reset(&mut self, overrides: MatchOverrides) {
        let config = self.base_config.apply(overrides);
        self.state = MatchState::new(config);
        info!(
            winning_score = config.winning_score.get(),
            double_on_six = config.double_on_six,
            "new match"
        );
        self.subscribers.publish(&MatchEvent::Reset { config });
    }

    /// Roll the die for the active player.
    ///
    /// A 1 forfeits the pending points and passes the turn; any other face
    /// is added to the pending score (twice for a 6 under `double_on_six`).
    pub fn roll_die(&mut self) -> Result<RollOutcome, EngineError> {
        if !self.state.is_active() {
            warn!("roll rejected: game not active");
            return Ok(RollOutcome::Rejected(Rejection::GameNotActive));
        }

        let face = self.dice.next_face()?;
        if !(1..=DIE_FACES).contains(&face) {
            return Err(DiceError::FaceOutOfRange { face }.into());
        }

        let player = self.state.active_player();
        self.state.count_roll();
        self.state.record(HistoryEntry::new(
            HistoryKind::Roll,
            player,
            u32::from(face),
            self.state.round_number(),
        ));

        if face == FORFEIT_FACE {
            let forfeited = self.state.pending_score();
            self.state.pass_turn();
            let next_player = self.state.active_player();
            debug!(%player, forfeited, "rolled a 1, turn lost");

            self.subscribers.publish(&MatchEvent::TurnLost {
                player,
                face,
                forfeited,
            });
            self.subscribers.publish(&MatchEvent::PlayerSwitched {
                active: next_player,
                round: self.state.round_number(),
            });

            return Ok(RollOutcome::TurnLost {
                face,
                forfeited,
                next_player,
            });
        }

        let gained = if self.state.double_on_six() && face == DOUBLED_FACE {
            2 * u32::from(face)
        } else {
            u32::from(face)
        };
        self.state.add_pending(gained);
        let pending = self.state.pending_score();
        debug!(%player, face, gained, pending, "roll applied");

        self.subscribers.publish(&MatchEvent::RollApplied {
            player,
            face,
            gained,
            pending,
        });

        Ok(RollOutcome::Applied {
            face,
            gained,
            pending,
        })
    }

    /// Bank the pending points for the active player.
    ///
    /// Reaching the winning score finishes the match; otherwise the turn
    /// passes to the opponent.
    pub fn hold(&mut self) -> HoldOutcome {
        if !self.state.is_active() {
            warn!("hold rejected: game not active");
            return HoldOutcome::Rejected(Rejection::GameNotActive);
        }
        if self.state.pending_score() == 0 {
            warn!("hold rejected: nothing pending");
            return HoldOutcome::Rejected(Rejection::NothingPending);
        }

        let player = self.state.active_player();
        let round = self.state.round_number();
        let banked = self.state.pending_score();
        let total = self.state.bank_pending();
        self.state
            .record(HistoryEntry::new(HistoryKind::Hold, player, banked, round));
        self.subscribers.publish(&MatchEvent::Held {
            player,
            banked,
            total,
        });

        if total >= self.state.winning_score() {
            self.state.finish();
            self.state
                .record(HistoryEntry::new(HistoryKind::Win, player, total, round));
            let duration = self.state.duration();
            info!(winner = %player, score = total, round, ?duration, "match won");

            self.subscribers.publish(&MatchEvent::GameWon {
                winner: player,
                score: total,
                round,
                duration,
            });
            return HoldOutcome::Won {
                winner: player,
                score: total,
            };
        }

        self.state.pass_turn();
        let next_player = self.state.active_player();
        debug!(%player, banked, total, "held");

        self.subscribers.publish(&MatchEvent::PlayerSwitched {
            active: next_player,
            round: self.state.round_number(),
        });

        HoldOutcome::Banked {
            banked,
            total,
            next_player,
        }
    }
}
