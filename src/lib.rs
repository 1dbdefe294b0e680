//! Skycatch - a catch-the-falling-items arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, game state)
//! - `driver`: Frame-clock-agnostic game loop driver
//! - `render`: 2D canvas rendering (browser only)
//! - `tuning`: Data-driven game balance

pub mod driver;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;
pub mod tuning;

pub use driver::GameLoop;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical canvas pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 520.0;

    /// Cap on a single frame delta, in seconds. Background tabs can sit for
    /// minutes between animation frames.
    pub const MAX_FRAME_DT: f32 = 0.1;
}
