//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Elapsed time handed in from outside, never read from a clock
//! - No rendering or platform dependencies

pub mod geom;
pub mod state;
pub mod tick;

pub use geom::{Rect, circle_rect_overlap};
pub use state::{GameEvent, GamePhase, GameState, Item, Paddle};
pub use tick::{TickInput, tick};
