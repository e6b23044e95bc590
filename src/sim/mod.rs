//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous tick per host frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod landing;
pub mod state;
pub mod tick;
pub mod view;

pub use landing::{LandingOutcome, resolve_landing};
pub use state::{Color, Debris, GameState, Mode, StackBox};
pub use tick::{TickInput, tick};
pub use view::{Scene, ScreenRect, scene};
