//! Game state and core simulation types
//!
//! The session state is owned by the loop driver and handed by reference
//! into the tick and render steps. All randomness flows through the seeded
//! RNG stored here, so a session is reproducible from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geom::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh session, waiting for the start command
    Idle,
    /// Active gameplay
    Running,
    /// Suspended mid-session
    Paused,
    /// Lives exhausted; only an explicit restart leaves this state
    GameOver,
}

/// Simulation events for the frontend, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ItemCaught { score: u32 },
    ItemMissed { lives: u8 },
    SpawnRateIncreased { interval: f32 },
    GameOver { score: u32 },
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed magnitude (pixels/sec)
    pub speed: f32,
    /// Current velocity, derived from input each tick
    pub vx: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning, field_width: f32, field_height: f32) -> Self {
        Self {
            x: (field_width - tuning.paddle_width) / 2.0,
            y: field_height - tuning.paddle_bottom_margin,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
            vx: 0.0,
        }
    }

    /// Paddle bounds for catch detection
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Keep the paddle fully inside the playfield
    pub fn clamp_to_field(&mut self, field_width: f32) {
        self.x = self.x.clamp(0.0, field_width - self.width);
    }
}

/// A falling item
#[derive(Debug, Clone)]
pub struct Item {
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed (pixels/sec)
    pub speed: f32,
    /// Hue in [0, 360); used only for rendering
    pub hue: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// Seconds between spawns; ratchets down as the score grows
    pub spawn_interval: f32,
    /// Time accumulated toward the next spawn
    pub spawn_timer: f32,
    pub paddle: Paddle,
    pub items: Vec<Item>,
    pub field_width: f32,
    pub field_height: f32,
    pub tuning: Tuning,
    /// Pending events for the frontend
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh Idle session with the given seed
    pub fn new(tuning: Tuning, field_width: f32, field_height: f32, seed: u64) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: tuning.starting_lives,
            spawn_interval: tuning.spawn_interval_start,
            spawn_timer: 0.0,
            paddle: Paddle::new(&tuning, field_width, field_height),
            items: Vec::new(),
            field_width,
            field_height,
            tuning,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn one item just above the top edge, fully on-screen horizontally.
    ///
    /// Fall speed carries a score bonus that saturates at
    /// `speed_bonus_cap`, so items get faster as the player scores.
    pub fn spawn_item(&mut self) {
        let t = self.tuning;
        let radius = self.rng.random_range(t.item_radius_min..=t.item_radius_max);
        let bonus = (self.score as f32 * t.speed_bonus_per_point).min(t.speed_bonus_cap);
        let speed = self.rng.random_range(t.item_speed_min..=t.item_speed_max) + bonus;
        let x = self.rng.random_range(radius..=self.field_width - radius);
        let hue = self.rng.random_range(0.0..360.0);

        self.items.push(Item {
            pos: Vec2::new(x, -radius),
            radius,
            speed,
            hue,
        });
    }

    /// Start command: Idle -> Running. Ignored in every other phase,
    /// including GameOver (a dead session needs a restart first).
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
            true
        } else {
            false
        }
    }

    /// Pause/resume toggle. Resuming requires lives remaining. Returns
    /// whether the phase changed; invalid toggles are silently ignored.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                true
            }
            GamePhase::Paused if self.lives > 0 => {
                self.phase = GamePhase::Running;
                true
            }
            _ => false,
        }
    }

    /// Restart command: reset to a fresh Idle session from any phase.
    /// Never auto-runs; a start command follows if the player wants in.
    pub fn restart(&mut self, seed: u64) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.spawn_interval = self.tuning.spawn_interval_start;
        self.spawn_timer = 0.0;
        self.paddle = Paddle::new(&self.tuning, self.field_width, self.field_height);
        self.items.clear();
        self.events.clear();
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Take pending events, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_state(seed: u64) -> GameState {
        GameState::new(Tuning::default(), 800.0, 520.0, seed)
    }

    #[test]
    fn test_new_session_is_idle() {
        let state = new_state(7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!((state.spawn_interval - 1.0).abs() < f32::EPSILON);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = new_state(7);
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Running);
        // Already running: ignored
        assert!(!state.start());

        state.phase = GamePhase::GameOver;
        assert!(!state.start());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = new_state(7);
        // Not running yet: ignored
        assert!(!state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Idle);

        state.start();
        assert!(state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_resume_requires_lives() {
        let mut state = new_state(7);
        state.start();
        state.toggle_pause();
        state.lives = 0;
        assert!(!state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = new_state(7);
        state.start();
        state.spawn_item();
        state.score = 42;
        state.lives = 0;
        state.spawn_interval = 0.3;
        state.spawn_timer = 0.5;
        state.phase = GamePhase::GameOver;

        state.restart(8);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!((state.spawn_interval - 1.0).abs() < f32::EPSILON);
        assert_eq!(state.spawn_timer, 0.0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_same_seed_spawns_identically() {
        let mut a = new_state(99);
        let mut b = new_state(99);
        for _ in 0..20 {
            a.spawn_item();
            b.spawn_item();
        }
        for (ia, ib) in a.items.iter().zip(&b.items) {
            assert_eq!(ia.pos, ib.pos);
            assert_eq!(ia.radius, ib.radius);
            assert_eq!(ia.speed, ib.speed);
            assert_eq!(ia.hue, ib.hue);
        }
    }

    proptest! {
        #[test]
        fn spawned_items_respect_bounds(seed in any::<u64>()) {
            let mut state = new_state(seed);
            for _ in 0..50 {
                state.spawn_item();
            }
            for item in &state.items {
                prop_assert!(item.radius >= 10.0 && item.radius <= 18.0);
                prop_assert!(item.pos.x >= item.radius);
                prop_assert!(item.pos.x <= state.field_width - item.radius);
                prop_assert!(item.pos.y == -item.radius);
                prop_assert!(item.speed >= 120.0 && item.speed <= 230.0);
                prop_assert!(item.hue >= 0.0 && item.hue < 360.0);
            }
        }
    }
}
