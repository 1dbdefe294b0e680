//! Frame-clock-agnostic loop driver
//!
//! `GameLoop` owns the session state plus the held input, converts host
//! timestamps into tick deltas, and tells the host whether another frame is
//! wanted. The host scheduler (requestAnimationFrame in the browser, a
//! synthetic clock in tests) stays entirely outside the simulation.

use crate::consts::MAX_FRAME_DT;
use crate::sim::{GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Owns the game state and drives ticks from host frame timestamps
#[derive(Debug)]
pub struct GameLoop {
    pub state: GameState,
    pub input: TickInput,
    last_time_ms: Option<f64>,
}

impl GameLoop {
    pub fn new(tuning: Tuning, field_width: f32, field_height: f32, seed: u64) -> Self {
        Self {
            state: GameState::new(tuning, field_width, field_height, seed),
            input: TickInput::default(),
            last_time_ms: None,
        }
    }

    /// Run one frame at the host timestamp (milliseconds).
    ///
    /// Returns true if the host should schedule another frame. The first
    /// frame after start/resume sees a zero delta; later deltas are capped
    /// at `MAX_FRAME_DT`.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let dt = match self.last_time_ms {
            Some(prev) => (((now_ms - prev) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);

        let input = self.input.clone();
        tick(&mut self.state, &input, dt);

        // Pointer input is one-shot; key state stays held until keyup
        self.input.pointer_x = None;

        self.state.phase == GamePhase::Running
    }

    /// Start command. Returns true if the session started, i.e. the host
    /// should begin scheduling frames.
    pub fn start(&mut self) -> bool {
        if self.state.start() {
            self.last_time_ms = None;
            true
        } else {
            false
        }
    }

    /// Pause/resume toggle. Returns true if the loop is running afterward
    /// and the host should resume scheduling.
    pub fn toggle_pause(&mut self) -> bool {
        self.state.toggle_pause();
        if self.state.phase == GamePhase::Running {
            // Fresh delta clock so the pause gap never becomes a tick
            self.last_time_ms = None;
            true
        } else {
            false
        }
    }

    /// Restart command: back to a fresh Idle session, scheduling withheld
    pub fn restart(&mut self, seed: u64) {
        self.state.restart(seed);
        self.input = TickInput::default();
        self.last_time_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Item;
    use glam::Vec2;

    const W: f32 = 800.0;
    const H: f32 = 520.0;

    fn new_loop(seed: u64) -> GameLoop {
        GameLoop::new(Tuning::default(), W, H, seed)
    }

    fn item_about_to_miss() -> Item {
        Item {
            pos: Vec2::new(10.0, H + 12.0),
            radius: 12.0,
            speed: 100.0,
            hue: 0.0,
        }
    }

    #[test]
    fn test_idle_loop_requests_no_frames() {
        let mut game = new_loop(1);
        assert!(!game.frame(0.0));
        assert_eq!(game.state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_start_runs_with_fresh_clock() {
        let mut game = new_loop(1);
        // A frame before start leaves a stale timestamp behind
        game.frame(5_000.0);
        assert!(game.start());
        // First running frame must not see the 5s gap as a delta
        assert!(game.frame(10_000.0));
        assert_eq!(game.state.spawn_timer, 0.0);
        // Second frame ticks normally
        game.frame(10_016.0);
        assert!(game.state.spawn_timer > 0.0);
    }

    #[test]
    fn test_frame_delta_is_capped() {
        let mut game = new_loop(1);
        game.start();
        game.frame(0.0);
        // A 30s stall comes through as MAX_FRAME_DT, not 30s
        game.frame(30_000.0);
        assert!(game.state.spawn_timer <= crate::consts::MAX_FRAME_DT + 1e-6);
    }

    #[test]
    fn test_pause_withholds_scheduling_resume_restores() {
        let mut game = new_loop(2);
        game.start();
        assert!(game.frame(0.0));

        assert!(!game.toggle_pause());
        assert!(!game.frame(16.0));
        assert_eq!(game.state.phase, GamePhase::Paused);

        assert!(game.toggle_pause());
        // Resume resets the clock: no giant delta from the pause gap
        assert!(game.frame(60_000.0));
        assert_eq!(game.state.spawn_timer, 0.0);
    }

    #[test]
    fn test_game_over_stops_rescheduling() {
        let mut game = new_loop(3);
        game.start();
        let mut now = 0.0;
        game.frame(now);
        // Three straight misses
        for _ in 0..3 {
            game.state.items.push(item_about_to_miss());
            now += 16.0;
            game.frame(now);
        }
        assert_eq!(game.state.phase, GamePhase::GameOver);
        now += 16.0;
        assert!(!game.frame(now));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = new_loop(4);
        game.start();
        game.frame(0.0);
        for i in 0..3 {
            game.state.items.push(item_about_to_miss());
            game.frame(16.0 * (i + 1) as f64);
        }
        assert_eq!(game.state.phase, GamePhase::GameOver);

        game.restart(5);
        assert_eq!(game.state.phase, GamePhase::Idle);
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.lives, 3);
        assert!(game.state.items.is_empty());
        // Not auto-running: the host gets no frame request until start
        assert!(!game.frame(1_000.0));
    }

    #[test]
    fn test_pointer_input_is_one_shot() {
        let mut game = new_loop(6);
        game.start();
        game.input.pointer_x = Some(300.0);
        game.frame(0.0);
        assert!(game.input.pointer_x.is_none());
        let pinned = game.state.paddle.x;

        game.input.move_right = true;
        game.frame(16.0);
        // Keys stay held across frames and move the paddle again
        assert!(game.input.move_right);
        assert!(game.state.paddle.x > pinned);
    }
}
