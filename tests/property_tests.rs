//! Rule invariants checked over generated die sequences and move orders.

use proptest::prelude::*;

use pig_engine::core::{GameRng, MatchConfig, MatchOverrides, PlayerId, ScriptedDice};
use pig_engine::rules::{HoldOutcome, Rejection, RollOutcome, TurnEngine};

#[derive(Clone, Copy, Debug)]
enum Move {
    Roll,
    Hold,
    Reset,
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        prop_oneof![
            6 => Just(Move::Roll),
            3 => Just(Move::Hold),
            1 => Just(Move::Reset),
        ],
        0..200,
    )
}

proptest! {
    #[test]
    fn pending_is_running_sum_of_non_forfeit_faces(
        faces in prop::collection::vec(2u8..=6, 1..40),
        double_on_six in any::<bool>(),
    ) {
        let config = MatchConfig::default().with_double_on_six(double_on_six);
        let mut engine = TurnEngine::new(config, ScriptedDice::new(faces.clone()));

        let mut expected = 0u32;
        for &face in &faces {
            engine.roll_die().unwrap();
            expected += u32::from(face);
            if double_on_six && face == 6 {
                expected += 6;
            }
            prop_assert_eq!(engine.state().pending_score(), expected);
            prop_assert_eq!(engine.state().active_player(), PlayerId::FIRST);
        }
    }

    #[test]
    fn rolling_one_always_forfeits(
        faces in prop::collection::vec(2u8..=6, 0..20),
    ) {
        let mut script = faces.clone();
        script.push(1);
        let mut engine = TurnEngine::new(MatchConfig::default(), ScriptedDice::new(script));

        for _ in &faces {
            engine.roll_die().unwrap();
        }
        let before = engine.snapshot();

        let outcome = engine.roll_die().unwrap();

        prop_assert_eq!(
            outcome,
            RollOutcome::TurnLost {
                face: 1,
                forfeited: before.pending_score(),
                next_player: before.active_player().other(),
            }
        );
        prop_assert_eq!(engine.state().pending_score(), 0);
        prop_assert_eq!(engine.state().active_player(), before.active_player().other());
        prop_assert_eq!(engine.state().round_number(), before.round_number() + 1);
        prop_assert_eq!(engine.state().scores(), before.scores());
    }

    #[test]
    fn finished_exactly_when_a_hold_reaches_threshold(
        seed in any::<u64>(),
        winning_score in 1u32..120,
        moves in moves(),
    ) {
        let config = MatchConfig::new(winning_score).unwrap();
        let mut engine = TurnEngine::new(config, GameRng::new(seed));

        for step in moves {
            let before = engine.snapshot();
            match step {
                Move::Roll => {
                    let outcome = engine.roll_die().unwrap();
                    // A roll never changes whether the match is over.
                    prop_assert_eq!(engine.state().is_active(), before.is_active());
                    prop_assert_eq!(engine.state().scores(), before.scores());
                    if !before.is_active() {
                        prop_assert_eq!(outcome, RollOutcome::Rejected(Rejection::GameNotActive));
                    }
                }
                Move::Hold => {
                    let outcome = engine.hold();
                    let after = engine.state();
                    if !before.is_active() || before.pending_score() == 0 {
                        prop_assert!(outcome.rejection().is_some());
                        prop_assert_eq!(after.scores(), before.scores());
                        prop_assert_eq!(after.active_player(), before.active_player());
                        continue;
                    }
                    let total = after.score(before.active_player());
                    prop_assert_eq!(total, before.score(before.active_player()) + before.pending_score());
                    prop_assert_eq!(!after.is_active(), total >= winning_score);
                    prop_assert_eq!(outcome.is_terminal(), total >= winning_score);
                }
                Move::Reset => {
                    engine.reset(MatchOverrides::none());
                }
            }

            let state = engine.state();
            prop_assert!(state.round_number() >= 1);
            if state.is_active() {
                prop_assert!(state.scores().iter().all(|&s| s < winning_score));
            }
        }
    }

    #[test]
    fn hold_with_nothing_pending_never_mutates(seed in any::<u64>(), rolls in 0usize..10) {
        let mut engine = TurnEngine::new(MatchConfig::default(), GameRng::new(seed));
        for _ in 0..rolls {
            engine.roll_die().unwrap();
        }
        if engine.state().pending_score() == 0 {
            let before = engine.snapshot();
            prop_assert_eq!(engine.hold(), HoldOutcome::Rejected(Rejection::NothingPending));
            prop_assert_eq!(engine.snapshot(), before);
        }
    }

    #[test]
    fn reset_always_yields_fresh_match(seed in any::<u64>(), moves in moves()) {
        let mut engine = TurnEngine::new(MatchConfig::new(20).unwrap(), GameRng::new(seed));
        for step in moves {
            match step {
                Move::Roll => { engine.roll_die().unwrap(); }
                Move::Hold => { engine.hold(); }
                Move::Reset => {}
            }
        }

        engine.reset(MatchOverrides::none());

        let state = engine.state();
        prop_assert_eq!(state.scores(), [0, 0]);
        prop_assert_eq!(state.pending_score(), 0);
        prop_assert_eq!(state.active_player(), PlayerId::FIRST);
        prop_assert_eq!(state.round_number(), 1);
        prop_assert!(state.is_active());
    }
}
