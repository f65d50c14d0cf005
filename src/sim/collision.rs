//! Collision detection
//!
//! The bird dies on touching a pipe, the ceiling or the floor. Pipe contact is
//! a strict rectangle overlap; the ceiling and floor are inclusive, so a bird
//! resting exactly on the floor line is already dead.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::GameEvent;

/// Vertical limits of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Death when the bird's top edge is at or above this y
    pub ceiling: f32,
    /// Death when the bird's bottom edge is at or below this y
    pub floor: f32,
}

/// What the bird hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Overlapped a pipe rectangle
    Pipe,
    /// Flew off the top
    Ceiling,
    /// Fell to the floor
    Floor,
}

/// Find the first collision, checking pipes, then ceiling, then floor
pub fn detect<I>(bird: &Rect, pipes: I, world: &WorldBounds) -> Option<Collision>
where
    I: IntoIterator<Item = Rect>,
{
    if pipes.into_iter().any(|pipe| bird.intersects(&pipe)) {
        return Some(Collision::Pipe);
    }
    if bird.top() <= world.ceiling {
        return Some(Collision::Ceiling);
    }
    if bird.bottom() >= world.floor {
        return Some(Collision::Floor);
    }
    None
}

/// Returns true while the bird is alive
///
/// A collision pushes a single `Hit` event; the caller handles the transition.
pub fn check<I>(bird: &Rect, pipes: I, world: &WorldBounds, events: &mut Vec<GameEvent>) -> bool
where
    I: IntoIterator<Item = Rect>,
{
    match detect(bird, pipes, world) {
        Some(collision) => {
            log::debug!("Collision: {:?}", collision);
            events.push(GameEvent::Hit);
            false
        }
        None => true,
    }
}
