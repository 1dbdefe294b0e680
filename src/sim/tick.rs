//! Simulation step
//!
//! Advances the session by one elapsed-time delta: spawn cadence, paddle
//! movement, item integration, catch/miss resolution, and the automatic
//! Running -> GameOver transition.

use super::geom::circle_rect_overlap;
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
    /// Absolute pointer x in playfield space; overrides keyboard movement
    /// for this tick
    pub pointer_x: Option<f32>,
}

/// Advance the game state by `dt` seconds of wall-clock time.
///
/// Only the Running phase simulates; every other phase is a no-op. The
/// integration is frame-rate independent, but collision sampling is not:
/// a very large `dt` can tunnel an item through the paddle, which the
/// driver bounds with its frame-delta cap.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Spawn cadence: one item per interval expiry, then the timer resets to
    // zero. Overshoot beyond the interval is dropped, never turned into
    // catch-up spawns.
    state.spawn_timer += dt;
    if state.spawn_timer > state.spawn_interval {
        state.spawn_item();
        state.spawn_timer = 0.0;
    }

    // Paddle movement. Left is checked first, so it wins when both keys are
    // held. A pointer position pins the paddle center directly and zeroes
    // the velocity for this tick.
    if let Some(px) = input.pointer_x {
        state.paddle.vx = 0.0;
        state.paddle.x = px - state.paddle.width / 2.0;
    } else {
        state.paddle.vx = if input.move_left {
            -state.paddle.speed
        } else if input.move_right {
            state.paddle.speed
        } else {
            0.0
        };
        state.paddle.x += state.paddle.vx * dt;
    }
    state.paddle.clamp_to_field(state.field_width);

    // Items, back to front so in-place removal neither skips nor revisits.
    let paddle_rect = state.paddle.rect();
    for i in (0..state.items.len()).rev() {
        state.items[i].pos.y += state.items[i].speed * dt;
        let item = &state.items[i];

        if circle_rect_overlap(item.pos, item.radius, &paddle_rect) {
            state.items.remove(i);
            state.score += 1;
            state.events.push(GameEvent::ItemCaught { score: state.score });

            // Difficulty ratchet at each score milestone, floored at the
            // minimum interval.
            if state.score % state.tuning.difficulty_score_step == 0 {
                let next = (state.spawn_interval - state.tuning.spawn_interval_step)
                    .max(state.tuning.spawn_interval_min);
                if next < state.spawn_interval {
                    state.spawn_interval = next;
                    state
                        .events
                        .push(GameEvent::SpawnRateIncreased { interval: next });
                }
            }
            continue;
        }

        // Miss: the item's top edge has fully passed the bottom of the field
        if item.pos.y - item.radius > state.field_height {
            state.items.remove(i);
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::ItemMissed { lives: state.lives });

            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver { score: state.score });
                return;
            }
        }
    }
}
