//! Fixed timestep simulation tick
//!
//! Each tick drains the queued keys through [`classify`], then, while
//! playing, runs one simulation step: spawn timer, wing animation, physics,
//! pipe scrolling and culling, collision, and finally scoring.

use super::collision::{self, WorldBounds};
use super::input::{Action, InputContext, Key, classify};
use super::physics;
use super::state::{Bird, Cosmetic, GameEvent, GameState, SessionPhase};
use crate::consts::WING_FRAMES;
use crate::highscores::Leaderboard;
use crate::persistence::ScoreStore;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys pressed since the previous tick, oldest first
    pub keys: Vec<Key>,
}

impl TickInput {
    pub fn key(key: Key) -> Self {
        Self { keys: vec![key] }
    }
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, store: &mut dyn ScoreStore) {
    for &key in &input.keys {
        handle_key(state, key, store);
    }

    if state.phase == SessionPhase::Playing {
        step(state, store);
    }
}

/// Classify and apply one key press; returns what it did
pub fn handle_key(state: &mut GameState, key: Key, store: &mut dyn ScoreStore) -> Action {
    let action = classify(&input_context(state), key);

    match action {
        Action::Start => start_run(state),
        Action::Flap => {
            physics::flap(&mut state.bird, state.tuning.flap_impulse);
            state.events.push(GameEvent::Flap);
        }
        Action::BeginName(c) => {
            state.name.clear();
            state.name.push(c);
            state.phase = SessionPhase::AwaitingName;
        }
        Action::Append(c) => state.name.push(c),
        Action::Erase => {
            state.name.pop();
        }
        Action::Confirm => submit_name(state, store),
        Action::Ignore => {}
    }

    action
}

/// Context the key classifier needs
pub fn input_context(state: &GameState) -> InputContext {
    InputContext {
        phase: state.phase,
        has_score: state.score() > 0.0,
        submitted: state.score_submitted,
        name_len: state.name.chars().count(),
    }
}

/// Reset everything run-scoped and enter `Playing`
pub fn start_run(state: &mut GameState) {
    state.scoring.reset();
    state.obstacles.clear();
    state.bird = Bird::new(state.tuning.bird_x, state.tuning.bird_start_y);
    state.cosmetic = Cosmetic::random(&mut state.rng);
    state.score_submitted = false;
    state.name.clear();
    state.wing_frame = 0;
    state.spawn_timer.arm();
    state.wing_timer.arm();
    state.phase = SessionPhase::Playing;
    state.events.push(GameEvent::RunStarted);

    log::info!(
        "Run started ({:?} bird, {:?} theme)",
        state.cosmetic.bird,
        state.cosmetic.theme
    );
}

/// One simulation step while playing
fn step(state: &mut GameState, store: &mut dyn ScoreStore) {
    state.time_ticks += 1;

    if state.spawn_timer.tick() {
        state.obstacles.spawn(&mut state.rng, &state.tuning);
    }
    if state.wing_timer.tick() {
        state.wing_frame = (state.wing_frame + 1) % WING_FRAMES;
    }

    physics::integrate(&mut state.bird, state.tuning.gravity);

    state.obstacles.advance(state.tuning.pipe_speed);
    state.obstacles.cull(state.tuning.cull_right);

    let world = WorldBounds {
        ceiling: state.tuning.ceiling_y,
        floor: state.tuning.floor_y,
    };
    let alive = collision::check(
        &state.bird.bounds(),
        state.obstacles.rects(),
        &world,
        &mut state.events,
    );

    if alive {
        state
            .scoring
            .update(state.bird.x, &state.obstacles, &mut state.events);
    } else {
        end_run(state, store);
    }
}

/// Leave `Playing` after a collision
fn end_run(state: &mut GameState, store: &mut dyn ScoreStore) {
    state.spawn_timer.disarm();
    state.wing_timer.disarm();
    state.phase = SessionPhase::Menu;

    let score = state.whole_score();
    state.events.push(GameEvent::RunEnded { score });
    log::info!(
        "Run ended at tick {} with score {} (session best {})",
        state.time_ticks,
        score,
        state.scoring.whole_best()
    );

    refresh_leaderboard(state, store);
}

/// Save the typed name with this run's score
fn submit_name(state: &mut GameState, store: &mut dyn ScoreStore) {
    let score = state.whole_score();

    if state.name.is_empty() {
        log::info!("Empty name, score {} not saved", score);
    } else {
        match store.write_one(&state.name, score) {
            Ok(()) => {
                log::info!("Saved score {} for {:?}", score, state.name);
                state.events.push(GameEvent::ScoreSaved { score });
            }
            Err(e) => {
                // Keep the prompt open so the player can retry
                log::warn!("Could not save score {}: {}", score, e);
                return;
            }
        }
    }

    state.score_submitted = true;
    state.phase = SessionPhase::NameSubmitted;
    refresh_leaderboard(state, store);
}

/// Replace the cached leaderboard with the store's current top entries
///
/// On failure the cached copy is left as it was.
pub fn refresh_leaderboard(state: &mut GameState, store: &dyn ScoreStore) {
    match store.read_top(state.leaderboard_size) {
        Ok(entries) => {
            state.leaderboard = Leaderboard::from_entries(entries, state.leaderboard_size);
        }
        Err(e) => log::warn!("Leaderboard unavailable: {}", e),
    }
}
