//! Skyflap entry point
//!
//! Headless driver: plays one autopilot run against the JSON score store,
//! saves it under the name given on the command line and prints the
//! leaderboard. A graphical frontend would replace the autopilot with real
//! key events and draw each `Snapshot`.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};

use skyflap::audio::{AudioManager, LogBackend};
use skyflap::clock::FixedStep;
use skyflap::consts::TICK_RATE;
use skyflap::persistence::{JsonFileStore, ScoreStore};
use skyflap::sim::{GameState, Key, SessionPhase, Snapshot, TickInput, refresh_leaderboard, tick};
use skyflap::{Settings, Tuning};

/// Name saved when none (or only whitespace) is given
const DEFAULT_NAME: &str = "AUTOPILOT";
/// Give up on a run after two minutes of game time
const MAX_RUN_TICKS: u64 = 120 * TICK_RATE as u64;
/// Pretend the display refreshes at 60 Hz
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Skyflap (headless) starting...");

    let name = player_name(std::env::args().nth(1));

    let settings = Settings::load(Path::new("settings.json"));
    let tuning = Tuning::load(Path::new("tuning.json"));
    let seed = match settings.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the Unix epoch")?
            .as_nanos() as u64,
    };

    let mut store = JsonFileStore::new(&settings.scores_path);
    let mut audio = AudioManager::new(LogBackend, &settings);
    let mut state = GameState::new(seed, tuning).with_leaderboard_size(settings.leaderboard_size);
    refresh_leaderboard(&mut state, &store);

    run_autopilot(&mut state, &mut store, &mut audio);

    let snapshot = Snapshot::capture(&state);
    println!(
        "Run over after {} ticks: score {} (best {})",
        state.time_ticks, snapshot.display_score, snapshot.session_best as u32
    );

    if state.phase == SessionPhase::Menu && state.whole_score() > 0 {
        let mut keys: Vec<Key> = name.chars().map(Key::Char).collect();
        keys.push(Key::Enter);
        tick(&mut state, &TickInput { keys }, &mut store);
        if state.phase != SessionPhase::NameSubmitted {
            bail!("could not save score to {}", store.path().display());
        }
        println!("Saved as {:?}", state.name);
    }

    let top = store
        .read_top(settings.leaderboard_size)
        .with_context(|| format!("reading {}", store.path().display()))?;
    println!("Leaderboard");
    for (i, entry) in top.iter().enumerate() {
        println!("{:>3}. {:<10} {:>5}", i + 1, entry.name, entry.score);
    }

    Ok(())
}

/// Name from the command line, or the default when it has no visible text
fn player_name(arg: Option<String>) -> String {
    arg.map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// Start a run and keep the bird near the next gap until it crashes
fn run_autopilot(
    state: &mut GameState,
    store: &mut JsonFileStore,
    audio: &mut AudioManager<LogBackend>,
) {
    let mut clock = FixedStep::default();
    tick(state, &TickInput::key(Key::Space), store);
    audio.dispatch(&state.drain_events());

    while state.phase == SessionPhase::Playing && state.time_ticks < MAX_RUN_TICKS {
        for _ in 0..clock.advance(FRAME_DT) {
            let input = if should_flap(state) {
                TickInput::key(Key::Space)
            } else {
                TickInput::default()
            };
            tick(state, &input, store);
            audio.dispatch(&state.drain_events());
            if state.phase != SessionPhase::Playing {
                break;
            }
        }
    }
}

/// Flap once the bird has sunk well below the middle of the next gap
fn should_flap(state: &GameState) -> bool {
    let bird = &state.bird;
    let target = state
        .obstacles
        .iter()
        .find(|o| o.right() > bird.bounds().left())
        .map(|o| o.gap_center)
        .unwrap_or(state.tuning.bird_start_y);
    bird.velocity_y > 0.0 && bird.y > target + 100.0
}
