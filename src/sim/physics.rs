//! Bird physics
//!
//! Everything is measured per tick rather than per second, so a run replays
//! identically at a fixed tick rate.

use super::state::Bird;

/// Advance the bird by one tick: gravity into velocity, velocity into position
#[inline]
pub fn integrate(bird: &mut Bird, gravity: f32) {
    bird.velocity_y += gravity;
    bird.y += bird.velocity_y;
}

/// Flap: replace the current velocity with the upward impulse
///
/// Not additive, so a flap has the same strength however fast the bird falls.
#[inline]
pub fn flap(bird: &mut Bird, impulse: f32) {
    bird.velocity_y = impulse;
}
