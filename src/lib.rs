//! Stack Drop - a "stack the falling box" arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (mode machine, physics, landing resolution)
//! - `renderer`: Canvas-2D rectangle rendering (wasm32 only)
//! - `highscores`: Best-score table persisted to LocalStorage

pub mod highscores;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Playfield width in logical units (also the canvas width)
    pub const PLAYFIELD_WIDTH: f32 = 320.0;
    /// Visible viewport height (canvas height)
    pub const VIEW_HEIGHT: f32 = 500.0;

    /// Height of every box in the stack
    pub const BOX_HEIGHT: f32 = 50.0;
    /// Width of the base box (and therefore the widest possible box)
    pub const INITIAL_BOX_WIDTH: f32 = 200.0;
    /// Logical height of the base box above the ground
    pub const BASE_BOX_Y: f32 = 200.0;

    /// Screen-space baseline: `screen_y = SCREEN_BASE_Y - logical_y + camera_y`
    pub const SCREEN_BASE_Y: f32 = 600.0;

    /// Starting horizontal bounce speed (units per tick)
    pub const INITIAL_X_SPEED: f32 = 2.0;
    /// Vertical fall speed (units per tick)
    pub const INITIAL_Y_SPEED: f32 = 5.0;

    /// New boxes spawn this many rows above their stack index
    pub const SPAWN_ROW_OFFSET: usize = 10;
}
