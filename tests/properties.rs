//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use skyflap::persistence::{MemoryStore, ScoreStore};
use skyflap::sim::{
    Bird, Collision, GameState, Key, Obstacle, Rect, SessionPhase, TickInput, WorldBounds, detect,
    flap, handle_key, integrate, tick,
};
use skyflap::Tuning;

const WORLD: WorldBounds = WorldBounds {
    ceiling: -100.0,
    floor: 900.0,
};

/// Park the bird in the next gap so the run survives
fn park_in_gap(state: &mut GameState) {
    let left = state.bird.bounds().left();
    let target = state
        .obstacles
        .iter()
        .find(|o| o.right() > left)
        .map(|o| o.gap_center)
        .unwrap_or(state.tuning.bird_start_y);
    state.bird.y = target;
    state.bird.velocity_y = 0.0;
}

proptest! {
    #[test]
    fn velocity_rises_between_flaps(flaps in prop::collection::vec(any::<bool>(), 1..200)) {
        let mut bird = Bird::new(100.0, 512.0);
        for do_flap in flaps {
            let before = bird.velocity_y;
            if do_flap {
                flap(&mut bird, -10.0);
                prop_assert_eq!(bird.velocity_y, -10.0);
                integrate(&mut bird, 0.25);
                prop_assert_eq!(bird.velocity_y, -9.75);
            } else {
                integrate(&mut bird, 0.25);
                prop_assert!(bird.velocity_y > before);
            }
        }
    }

    #[test]
    fn flap_key_sets_impulse_immediately(idle in 0usize..40) {
        let mut state = GameState::new(11, Tuning::default());
        let mut store = MemoryStore::new();
        tick(&mut state, &TickInput::key(Key::Space), &mut store);
        for _ in 0..idle {
            tick(&mut state, &TickInput::default(), &mut store);
        }
        prop_assume!(state.phase == SessionPhase::Playing);

        handle_key(&mut state, Key::Space, &mut store);
        prop_assert_eq!(state.bird.velocity_y, state.tuning.flap_impulse);
    }

    #[test]
    fn pipes_only_move_left_and_stay_culled(seed in any::<u64>(), ticks in 150usize..1200) {
        let mut state = GameState::new(seed, Tuning::default());
        let mut store = MemoryStore::new();
        tick(&mut state, &TickInput::key(Key::Space), &mut store);

        let mut culled = 0usize;
        let mut spawned_before = 0usize;
        let mut previous: Vec<Obstacle> = Vec::new();
        for _ in 0..ticks {
            park_in_gap(&mut state);
            tick(&mut state, &TickInput::default(), &mut store);
            prop_assert_eq!(state.phase, SessionPhase::Playing);

            let current = state.obstacles.as_slice();
            let speed = state.tuning.pipe_speed;
            // Survivors are a suffix of the previous list, each moved left
            let dropped = previous
                .iter()
                .filter(|o| o.right() - speed <= state.tuning.cull_right)
                .count();
            let survivors = previous.len() - dropped;
            prop_assert!(current.len() >= survivors);
            let new_spawns = current.len() - survivors;
            prop_assert!(new_spawns <= 1);
            for (old, new) in previous[dropped..].iter().zip(current) {
                prop_assert_eq!(old.gap_center, new.gap_center);
                prop_assert!(new.x() <= old.x());
                prop_assert_eq!(new.x(), old.x() - speed);
            }
            // Anything still present is right of the cull line; order is left to right
            for o in current {
                prop_assert!(o.right() > state.tuning.cull_right);
            }
            for pair in current.windows(2) {
                prop_assert!(pair[0].x() < pair[1].x());
            }

            culled += dropped;
            spawned_before += new_spawns;
            prop_assert_eq!(spawned_before - culled, current.len());
            previous = current.to_vec();
        }
    }

    #[test]
    fn collision_is_or_of_three_checks(
        bird_y in -200.0f32..1000.0,
        pipe_x in -100.0f32..700.0,
        gap_index in 0usize..3,
    ) {
        let gap_center = [250.0, 450.0, 650.0][gap_index];
        let bird = Rect::from_center(Vec2::new(100.0, bird_y), Vec2::new(68.0, 48.0));
        let pipe = Obstacle::new(pipe_x, gap_center, 300.0);

        let overlaps = pipe.rects().iter().any(|r| bird.intersects(r));
        let expected = overlaps || bird.top() <= WORLD.ceiling || bird.bottom() >= WORLD.floor;
        let found = detect(&bird, pipe.rects(), &WORLD);
        prop_assert_eq!(found.is_some(), expected);
        if overlaps {
            prop_assert_eq!(found, Some(Collision::Pipe));
        }
    }

    #[test]
    fn score_is_monotonic_and_steps_by_pairs(seed in any::<u64>(), ticks in 100usize..900) {
        let mut state = GameState::new(seed, Tuning::default());
        let mut store = MemoryStore::new();
        tick(&mut state, &TickInput::key(Key::Space), &mut store);

        for _ in 0..ticks {
            park_in_gap(&mut state);
            let before = state.score();
            let crossing = state
                .obstacles
                .iter()
                .filter(|o| o.lower.center_x() - state.tuning.pipe_speed == state.bird.x)
                .count() as f32;
            tick(&mut state, &TickInput::default(), &mut store);

            let gained = state.score() - before;
            prop_assert!(gained >= 0.0);
            prop_assert_eq!(gained, crossing);
            prop_assert!(state.session_best() >= state.score());
        }
    }

    #[test]
    fn written_scores_read_back(
        runs in prop::collection::vec(("[A-Z]{1,10}", 0u32..500), 1..30)
    ) {
        let mut store = MemoryStore::new();
        for (name, score) in &runs {
            store.write_one(name, *score).unwrap();
        }
        let top = store.read_top(runs.len()).unwrap();
        prop_assert_eq!(top.len(), runs.len());
        for pair in top.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for (name, score) in &runs {
            prop_assert!(top.iter().any(|e| &e.name == name && e.score == *score));
        }
    }
}
