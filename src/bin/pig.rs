//! Terminal front end for the Pig engine.
//!
//! Renders purely from engine events; the only calls into the engine are
//! roll, hold, reset and snapshot reads.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pig_engine::{
    DiceSource, Difficulty, EventSink, GameRng, MatchEvent, MatchOverrides, MatchStats, PlayerId,
    TracingSink, TurnEngine,
};

#[derive(Parser, Debug)]
#[command(name = "pig", about = "Play Pig, the two-player dice game")]
struct Args {
    /// Seed for a reproducible die; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Preset rules: easy, medium or hard.
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Override the preset's winning score.
    #[arg(long)]
    winning_score: Option<NonZeroU32>,

    /// Count every rolled 6 twice; `--double-on-six false` turns the
    /// hard preset's doubling off.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    double_on_six: Option<bool>,

    /// Play unattended: each player holds once pending reaches this value.
    #[arg(long)]
    auto_hold: Option<NonZeroU32>,
}

impl Args {
    fn overrides(&self) -> MatchOverrides {
        let mut overrides = MatchOverrides::none();
        if let Some(score) = self.winning_score {
            overrides = overrides.with_winning_score(score);
        }
        if let Some(double) = self.double_on_six {
            overrides = overrides.with_double_on_six(double);
        }
        overrides
    }
}

/// Prints each event as a line of table talk.
struct ConsoleView;

impl EventSink for ConsoleView {
    fn notify(&mut self, event: &MatchEvent) {
        match *event {
            MatchEvent::Reset { config } => println!(
                "New match to {}{}. {} to roll.",
                config.winning_score,
                if config.double_on_six { ", sixes count double" } else { "" },
                PlayerId::FIRST
            ),
            MatchEvent::RollApplied {
                player,
                face,
                gained,
                pending,
            } => {
                if u32::from(face) == gained {
                    println!("{player} rolled {face}. Pending {pending}.");
                } else {
                    println!("{player} rolled {face}, doubled to {gained}! Pending {pending}.");
                }
            }
            MatchEvent::TurnLost {
                player, forfeited, ..
            } => println!("{player} rolled a 1 and loses {forfeited} points!"),
            MatchEvent::Held {
                player,
                banked,
                total,
            } => println!("{player} holds {banked}, total {total}."),
            MatchEvent::PlayerSwitched { active, round } => {
                println!("Round {round}: {active}'s turn.");
            }
            MatchEvent::GameWon {
                winner,
                score,
                duration,
                ..
            } => {
                println!(
                    "{winner} wins with {score} points in {}s!",
                    duration.as_secs()
                );
            }
        }
    }
}

fn print_scores<D: DiceSource>(engine: &TurnEngine<D>) {
    let state = engine.snapshot();
    let [first, second] = state.scores();
    println!(
        "  {}: {first}  |  {}: {second}  |  pending {}  |  target {}",
        PlayerId::FIRST,
        PlayerId::SECOND,
        state.pending_score(),
        state.winning_score()
    );
}

fn print_stats(stats: &MatchStats) {
    println!("Games won: {}", stats.games_played);
    for player in PlayerId::all() {
        println!(
            "  {player}: {} wins ({:.0}%), longest streak {}",
            stats.wins[player],
            stats.win_rate(player) * 100.0,
            stats.longest_win_streak[player]
        );
    }
    println!("Highest banked score: {}", stats.highest_score);
    println!(
        "Rolls: {} total, {:.1} per finished game",
        stats.total_rolls,
        stats.average_rolls_per_game()
    );
    let faces: Vec<String> = (1..=6u8)
        .map(|face| format!("{face}:{}", stats.face_count(face)))
        .collect();
    println!("Faces: {}", faces.join(" "));
    if let Some(rounds) = stats.fewest_rounds_to_win {
        println!("Fewest rounds to win: {rounds}");
    }
    if let Some(fastest) = stats.fastest_win {
        println!(
            "Fastest win: {}s, average game {}s",
            fastest.as_secs(),
            stats.average_game_duration().as_secs()
        );
    }
    if let Some(at) = stats.last_played {
        println!("Last played: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}

fn autoplay<D: DiceSource>(engine: &mut TurnEngine<D>, hold_at: NonZeroU32) -> Result<()> {
    while engine.can_roll() {
        if engine.state().pending_score() >= hold_at.get() {
            engine.hold();
        } else {
            engine.roll_die()?;
        }
    }
    print_scores(engine);
    Ok(())
}

fn interactive<D: DiceSource>(
    engine: &mut TurnEngine<D>,
    stats: &RefCell<MatchStats>,
    overrides: MatchOverrides,
) -> Result<()> {
    println!("Commands: [r]oll, [h]old, [n]ew match, [s]tats, [q]uit");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };

        match line?.trim().to_ascii_lowercase().as_str() {
            "r" | "roll" | "" => {
                if let Some(reason) = engine.roll_die()?.rejection() {
                    println!("Cannot roll: {reason}. Press n for a new match.");
                }
            }
            "h" | "hold" => {
                if let Some(reason) = engine.hold().rejection() {
                    println!("Cannot hold: {reason}.");
                }
            }
            "n" | "new" => engine.reset(overrides),
            "s" | "stats" => print_stats(&stats.borrow()),
            "q" | "quit" => return Ok(()),
            other => println!("Unknown command `{other}`."),
        }
        print_scores(engine);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    println!("Die seed {0} (replay with --seed {0}).", rng.seed());
    let overrides = args.overrides();

    let stats = Rc::new(RefCell::new(MatchStats::new()));
    let mut engine = TurnEngine::new(args.difficulty.config(), rng);
    engine.subscribe(ConsoleView);
    engine.subscribe(stats.clone());
    engine.subscribe(TracingSink);
    engine.reset(overrides);

    let result = match args.auto_hold {
        Some(hold_at) => autoplay(&mut engine, hold_at),
        None => interactive(&mut engine, &stats, overrides),
    };
    if let Err(err) = &result {
        error!(%err, "game aborted");
    }

    print_stats(&stats.borrow());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pig_engine::MatchConfig;

    fn config_for(argv: &[&str]) -> MatchConfig {
        let args = Args::try_parse_from(argv.iter().copied()).unwrap();
        args.difficulty.config().apply(args.overrides())
    }

    #[test]
    fn test_hard_preset_doubles_sixes() {
        let config = config_for(&["pig", "--difficulty", "hard"]);
        assert_eq!(config.winning_score.get(), 100);
        assert!(config.double_on_six);
    }

    #[test]
    fn test_double_on_six_can_be_switched_off() {
        let config = config_for(&["pig", "--difficulty", "hard", "--double-on-six", "false"]);
        assert_eq!(config.winning_score.get(), 100);
        assert!(!config.double_on_six);
    }

    #[test]
    fn test_bare_double_on_six_switches_it_on() {
        let config = config_for(&["pig", "--double-on-six"]);
        assert_eq!(config.winning_score.get(), 50);
        assert!(config.double_on_six);
    }

    #[test]
    fn test_rejects_zero_winning_score() {
        assert!(Args::try_parse_from(["pig", "--winning-score", "0"]).is_err());
    }
}
