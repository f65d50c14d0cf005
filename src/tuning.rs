//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a JSON file can
//! override it. Units are per tick unless the field name says otherwise.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_HEIGHT;
use crate::ms_to_ticks;

/// Longest spawn or wing interval a tuning file may ask for
pub const MAX_INTERVAL_MS: u32 = 60_000;

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bird ===
    /// Downward acceleration added to the bird's velocity each tick
    pub gravity: f32,
    /// Velocity the bird is set to on a flap (negative = upward)
    pub flap_impulse: f32,
    /// Fixed horizontal center of the bird
    pub bird_x: f32,
    /// Vertical center the bird starts each run at
    pub bird_start_y: f32,

    // === Pipes ===
    /// Horizontal distance pipes move left each tick
    pub pipe_speed: f32,
    /// Horizontal center of freshly spawned pipes
    pub pipe_spawn_x: f32,
    /// Vertical opening between the lower and upper pipe
    pub pipe_gap: f32,
    /// Allowed vertical gap centers; one is chosen uniformly per spawn
    pub gap_centers: Vec<f32>,
    /// Pipes are dropped once their right edge reaches this x
    pub cull_right: f32,
    /// Milliseconds between pipe spawns
    pub spawn_interval_ms: u32,

    // === World ===
    /// The run ends when the bird's top edge reaches this y
    pub ceiling_y: f32,
    /// The run ends when the bird's bottom edge reaches this y
    pub floor_y: f32,

    // === Cosmetics ===
    /// Milliseconds between wing animation frames
    pub wing_interval_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            flap_impulse: -10.0,
            bird_x: 100.0,
            bird_start_y: SCREEN_HEIGHT / 2.0,

            pipe_speed: 5.0,
            pipe_spawn_x: 700.0,
            pipe_gap: 300.0,
            gap_centers: vec![250.0, 450.0, 650.0],
            cull_right: -50.0,
            spawn_interval_ms: 1200,

            ceiling_y: -100.0,
            floor_y: 900.0,

            wing_interval_ms: 200,
        }
    }
}

impl Tuning {
    /// Pipe spawn interval in ticks
    pub fn spawn_interval_ticks(&self) -> u32 {
        ms_to_ticks(self.spawn_interval_ms)
    }

    /// Wing animation interval in ticks
    pub fn wing_interval_ticks(&self) -> u32 {
        ms_to_ticks(self.wing_interval_ms)
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> io::Result<()> {
        if self.gravity <= 0.0 {
            return Err(invalid(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if self.flap_impulse >= 0.0 {
            return Err(invalid(format!(
                "flap_impulse must be negative (upward), got {}",
                self.flap_impulse
            )));
        }
        if self.pipe_speed <= 0.0 {
            return Err(invalid(format!(
                "pipe_speed must be positive, got {}",
                self.pipe_speed
            )));
        }
        if self.gap_centers.is_empty() {
            return Err(invalid("gap_centers must not be empty".to_string()));
        }
        if self.ceiling_y >= self.floor_y {
            return Err(invalid(format!(
                "ceiling_y ({}) must be above floor_y ({})",
                self.ceiling_y, self.floor_y
            )));
        }
        for (field, ms) in [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("wing_interval_ms", self.wing_interval_ms),
        ] {
            if ms == 0 || ms > MAX_INTERVAL_MS {
                return Err(invalid(format!(
                    "{} must be within 1..={}, got {}",
                    field, MAX_INTERVAL_MS, ms
                )));
            }
        }
        Ok(())
    }

    /// Load tuning from a JSON file, falling back to defaults
    ///
    /// Missing fields take their default value, so partial files are fine.
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No tuning file at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Tuning>(&json) {
            Ok(tuning) => match tuning.validate() {
                Ok(()) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(reason) => {
                    log::warn!("Rejected tuning from {}: {}", path.display(), reason);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Malformed tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.spawn_interval_ticks(), 144);
        assert_eq!(tuning.wing_interval_ticks(), 24);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 0.5 }"#).unwrap();
        assert!((tuning.gravity - 0.5).abs() < f32::EPSILON);
        assert_eq!(tuning.gap_centers, Tuning::default().gap_centers);
        assert!((tuning.floor_y - 900.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut tuning = Tuning::default();
        tuning.gap_centers.clear();
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.flap_impulse = 3.0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.ceiling_y = 1000.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_intervals() {
        let huge: Tuning = serde_json::from_str(r#"{ "spawn_interval_ms": 40000000 }"#).unwrap();
        let err = huge.validate().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        // Still converts without overflowing if a caller skips validation
        assert_eq!(huge.spawn_interval_ticks(), 4_800_000);

        let zero = Tuning {
            wing_interval_ms: 0,
            ..Tuning::default()
        };
        assert!(zero.validate().is_err());

        let longest = Tuning {
            spawn_interval_ms: MAX_INTERVAL_MS,
            ..Tuning::default()
        };
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_huge_interval() {
        let path = std::env::temp_dir().join(format!(
            "skyflap-tuning-huge-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "spawn_interval_ms": 40000000 }"#)
            .expect("Failed to write tuning file");

        assert_eq!(Tuning::load(&path), Tuning::default());

        fs::remove_file(&path).expect("Failed to remove tuning file");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("skyflap-tuning-does-not-exist.json");
        assert_eq!(Tuning::load(&path), Tuning::default());
    }
}
