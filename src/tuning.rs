//! Data-driven game balance
//!
//! Every gameplay number lives here so balance can be tweaked without
//! touching the simulation. A `Tuning` deserializes from JSON; missing
//! fields fall back to the defaults, so partial overrides work.

use serde::{Deserialize, Serialize};

/// Game balance parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal speed from keyboard input (pixels/sec)
    pub paddle_speed: f32,
    /// Distance from the paddle top to the playfield bottom
    pub paddle_bottom_margin: f32,

    // === Session ===
    pub starting_lives: u8,
    /// Seconds between spawns at score 0
    pub spawn_interval_start: f32,
    /// Hard floor for the spawn interval
    pub spawn_interval_min: f32,
    /// How much the interval drops at each milestone
    pub spawn_interval_step: f32,
    /// Score milestone spacing for the difficulty ratchet
    pub difficulty_score_step: u32,

    // === Items ===
    pub item_radius_min: f32,
    pub item_radius_max: f32,
    /// Base fall speed range (pixels/sec)
    pub item_speed_min: f32,
    pub item_speed_max: f32,
    /// Extra fall speed per point of score
    pub speed_bonus_per_point: f32,
    /// Saturation point for the score bonus
    pub speed_bonus_cap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: 120.0,
            paddle_height: 16.0,
            paddle_speed: 420.0,
            paddle_bottom_margin: 30.0,

            starting_lives: 3,
            spawn_interval_start: 1.0,
            spawn_interval_min: 0.3,
            spawn_interval_step: 0.1,
            difficulty_score_step: 10,

            item_radius_min: 10.0,
            item_radius_max: 18.0,
            item_speed_min: 120.0,
            item_speed_max: 230.0,
            speed_bonus_per_point: 3.0,
            speed_bonus_cap: 300.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let t = Tuning::default();
        assert_eq!(t.starting_lives, 3);
        assert!((t.spawn_interval_start - 1.0).abs() < f32::EPSILON);
        assert!((t.spawn_interval_min - 0.3).abs() < f32::EPSILON);
        assert_eq!(t.difficulty_score_step, 10);
        assert!(t.item_radius_min < t.item_radius_max);
        assert!(t.item_speed_min < t.item_speed_max);
    }

    #[test]
    fn test_partial_json_override() {
        let t = Tuning::from_json(r#"{"paddle_speed": 500.0, "starting_lives": 5}"#).unwrap();
        assert_eq!(t.paddle_speed, 500.0);
        assert_eq!(t.starting_lives, 5);
        // Everything else keeps the default
        assert_eq!(t.paddle_width, 120.0);
        assert_eq!(t.difficulty_score_step, 10);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
