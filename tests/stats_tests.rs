//! Statistics gathered by subscribing `MatchStats` to a live engine.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pig_engine::core::{GameRng, HistoryKind, MatchConfig, MatchOverrides, PlayerId, ScriptedDice};
use pig_engine::events::EventKind;
use pig_engine::rules::TurnEngine;
use pig_engine::stats::MatchStats;

/// Roll until pending reaches `hold_at`, then hold; repeat until someone wins.
fn play_out<D: pig_engine::core::DiceSource>(engine: &mut TurnEngine<D>, hold_at: u32) {
    while engine.can_roll() {
        if engine.state().pending_score() >= hold_at {
            engine.hold();
        } else {
            engine.roll_die().unwrap();
        }
    }
}

#[test]
fn test_stats_follow_seeded_matches() {
    let stats = Rc::new(RefCell::new(MatchStats::new()));
    let mut engine = TurnEngine::new(MatchConfig::new(30).unwrap(), GameRng::new(7));
    engine.subscribe(stats.clone());

    let mut winners = Vec::new();
    let mut rolls = 0u64;
    let mut durations = Vec::new();
    for _ in 0..20 {
        engine.reset(MatchOverrides::none());
        play_out(&mut engine, 12);

        let state = engine.snapshot();
        winners.push(state.winner().unwrap());
        durations.push(state.duration());
        rolls += state
            .history()
            .iter()
            .filter(|e| e.kind == HistoryKind::Roll)
            .count() as u64;
    }

    let stats = stats.borrow();
    assert_eq!(stats.games_played, 20);
    assert_eq!(stats.wins[PlayerId::FIRST] + stats.wins[PlayerId::SECOND], 20);
    let first_wins = winners.iter().filter(|&&w| w == PlayerId::FIRST).count() as u32;
    assert_eq!(stats.wins[PlayerId::FIRST], first_wins);

    assert_eq!(stats.total_rolls, rolls);
    assert_eq!(stats.face_counts.iter().sum::<u64>(), rolls);
    assert_eq!(stats.rolls_in_finished_games, rolls);
    assert!(stats.highest_score >= 30);
    assert_eq!(stats.event_count(EventKind::GameWon), 20);
    assert_eq!(stats.event_count(EventKind::Reset), 20);

    assert_eq!(stats.total_game_time, durations.iter().sum::<Duration>());
    assert_eq!(stats.fastest_win, durations.iter().min().copied());
    assert!(stats.last_played.is_some());
}

#[test]
fn test_stats_from_scripted_match() {
    let stats = Rc::new(RefCell::new(MatchStats::new()));
    let config = MatchConfig::new(10).unwrap();
    let mut engine = TurnEngine::new(config, ScriptedDice::new([6, 1, 2, 5, 5]));
    engine.subscribe(stats.clone());

    engine.roll_die().unwrap();
    engine.hold(); // player 1 banks 6
    engine.roll_die().unwrap(); // player 2 forfeits
    engine.roll_die().unwrap();
    engine.roll_die().unwrap();
    engine.roll_die().unwrap();
    engine.hold(); // player 1 banks 12 more, 18 total

    let stats = stats.borrow();
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.wins.into_array(), [1, 0]);
    assert_eq!(stats.highest_score, 18);
    assert_eq!(stats.face_count(5), 2);
    assert_eq!(stats.face_count(1), 1);
    assert_eq!(stats.fewest_rounds_to_win, Some(3));
    assert_eq!(stats.average_rolls_per_game(), 5.0);
    assert_eq!(stats.event_count(EventKind::TurnLost), 1);
    assert_eq!(stats.event_count(EventKind::PlayerSwitched), 2);
}
