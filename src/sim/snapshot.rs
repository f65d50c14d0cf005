//! Read-only view of a session for renderers

use glam::Vec2;
use serde::Serialize;

use super::geometry::Rect;
use super::state::{Cosmetic, GameState, SessionPhase};
use crate::highscores::Leaderboard;

/// Which message the menu screens show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Prompt {
    /// In a run, nothing to show
    None,
    /// No run played yet (or the last one scored nothing)
    Title,
    /// Game over: space to play, type to save
    PlayOrSave,
    /// Name prompt is open
    EnterName,
    /// Score saved: space to play again
    Saved,
}

/// A pipe rectangle and which way up it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeSprite {
    pub rect: Rect,
    /// Upper pipes are drawn flipped
    pub flipped: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub prompt: Prompt,
    /// Bird center
    pub bird_pos: Vec2,
    /// Bird bounding box
    pub bird_bounds: Rect,
    /// Bird tilt in degrees (counter-clockwise)
    pub bird_rotation: f32,
    /// Wing animation frame (0 = down, 1 = mid, 2 = up)
    pub wing_frame: u8,
    pub cosmetic: Cosmetic,
    pub pipes: Vec<PipeSprite>,
    pub score: f32,
    /// Whole points, as shown on screen
    pub display_score: u32,
    pub session_best: f32,
    pub name: String,
    pub leaderboard: Leaderboard,
    /// Where the finished run would land on the cached leaderboard
    pub potential_rank: Option<usize>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let whole_score = state.whole_score();
        let prompt = match state.phase {
            SessionPhase::Playing => Prompt::None,
            SessionPhase::AwaitingName => Prompt::EnterName,
            SessionPhase::NameSubmitted => Prompt::Saved,
            SessionPhase::Menu if state.score() > 0.0 => Prompt::PlayOrSave,
            SessionPhase::Menu => Prompt::Title,
        };
        let potential_rank = match state.phase {
            SessionPhase::Menu | SessionPhase::AwaitingName if !state.score_submitted => {
                state.leaderboard.potential_rank(whole_score)
            }
            _ => None,
        };

        let pipes = state
            .obstacles
            .iter()
            .flat_map(|o| {
                [
                    PipeSprite {
                        rect: o.lower,
                        flipped: false,
                    },
                    PipeSprite {
                        rect: o.upper,
                        flipped: true,
                    },
                ]
            })
            .collect();

        Self {
            phase: state.phase,
            prompt,
            bird_pos: Vec2::new(state.bird.x, state.bird.y),
            bird_bounds: state.bird.bounds(),
            bird_rotation: state.bird.rotation_degrees(),
            wing_frame: state.wing_frame,
            cosmetic: state.cosmetic,
            pipes,
            score: state.score(),
            display_score: whole_score,
            session_best: state.session_best(),
            name: state.name.clone(),
            leaderboard: state.leaderboard.clone(),
            potential_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::LeaderboardEntry;
    use crate::tuning::Tuning;

    #[test]
    fn test_title_snapshot() {
        let state = GameState::new(5, Tuning::default());
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.prompt, Prompt::Title);
        assert!(snap.pipes.is_empty());
        assert_eq!(snap.bird_pos, Vec2::new(100.0, 512.0));
        assert_eq!(snap.display_score, 0);
        assert_eq!(snap.potential_rank, None);
    }

    #[test]
    fn test_game_over_snapshot() {
        let mut state = GameState::new(5, Tuning::default());
        state.scoring.score = 3.5;
        state.scoring.best = 3.5;
        state.leaderboard = Leaderboard::from_entries(
            vec![LeaderboardEntry::new("TOP", 8), LeaderboardEntry::new("LOW", 1)],
            10,
        );
        state.obstacles.spawn(&mut state.rng, &state.tuning);

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.prompt, Prompt::PlayOrSave);
        assert_eq!(snap.display_score, 3);
        assert_eq!(snap.potential_rank, Some(2));
        assert_eq!(snap.pipes.len(), 2);
        assert!(!snap.pipes[0].flipped);
        assert!(snap.pipes[1].flipped);

        state.phase = SessionPhase::NameSubmitted;
        state.score_submitted = true;
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.prompt, Prompt::Saved);
        assert_eq!(snap.potential_rank, None);
    }

    #[test]
    fn test_low_score_on_full_board_has_no_rank() {
        let mut state = GameState::new(5, Tuning::default());
        state.scoring.score = 3.0;
        let full = (50..60)
            .map(|s| LeaderboardEntry::new(&format!("P{}", s), s))
            .collect();
        state.leaderboard = Leaderboard::from_entries(full, 10);

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.prompt, Prompt::PlayOrSave);
        assert_eq!(snap.potential_rank, None);
    }
}
