//! Per-frame simulation tick
//!
//! The host scheduler calls [`tick`] exactly once per rendered frame. Each
//! tick dispatches on the current [`Mode`], mutates the [`GameState`], and
//! returns; rendering reads the resulting state through [`super::view`].

use super::landing::{LandingOutcome, resolve_landing};
use super::state::{GameState, Mode};
use crate::consts::*;

/// Input latched for a single tick
///
/// `drop` is a one-shot flag: the shell sets it on key/touch press and
/// clears it after the tick. It is consumed only while bouncing, so repeat
/// presses during a fall are no-ops.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the bouncing box (space / tap)
    pub drop: bool,
}

/// Advance the game state by one frame.
///
/// A no-op once the mode is `GameOver`, so a driver that fails to cancel
/// its frame callback cannot corrupt a finished session.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.mode == Mode::GameOver {
        return;
    }

    if input.drop && state.mode == Mode::Bounce {
        state.mode = Mode::Fall;
    }

    match state.mode {
        Mode::Bounce => bounce_step(state),
        Mode::Fall => fall_step(state),
        Mode::GameOver => {}
    }

    camera_step(state);
}

/// Slide the current box horizontally, reflecting off the playfield walls.
///
/// The reflection only negates the speed for the next tick; the overshoot
/// itself is not clamped, so a box may sit briefly past a wall.
fn bounce_step(state: &mut GameState) {
    let x_speed = state.x_speed;
    let current = &mut state.boxes[state.current];
    current.x += x_speed;

    let hit_right = current.right() > PLAYFIELD_WIDTH;
    let hit_left = current.x < 0.0;
    if hit_right || hit_left {
        state.x_speed = -x_speed;
    }
}

/// Descend toward the stack top and resolve the landing when the box
/// reaches it.
///
/// Landing triggers when the box's bottom edge crosses or reaches the
/// previous box's top surface; the position is clamped to the plane so the
/// resolved geometry sits exactly on the stack even if the fall speed does
/// not divide the gap.
fn fall_step(state: &mut GameState) {
    let plane = state.previous_box().top();
    let y_speed = state.y_speed;
    let current = &mut state.boxes[state.current];

    current.y -= y_speed;
    if current.y <= plane {
        current.y = plane;
        land(state);
    }
}

/// Apply the landing side effects: trim or end the run.
fn land(state: &mut GameState) {
    match resolve_landing(state.current_box(), state.previous_box()) {
        LandingOutcome::Miss => {
            state.mode = Mode::GameOver;
            log::info!("game over at score {}", state.score);
        }
        LandingOutcome::Stacked { x, width, debris } => {
            let current = &mut state.boxes[state.current];
            current.x = x;
            current.width = width;
            state.debris = debris;

            state.x_speed += state.x_speed.signum();
            state.score = state.current as u32;
            state.current += 1;
            state.scroll_counter = BOX_HEIGHT;
            state.mode = Mode::Bounce;
            state.spawn_box();

            log::debug!(
                "stacked box {} (width {width}, speed {})",
                state.score,
                state.x_speed
            );
        }
    }
}

/// Pay down the scroll owed by the last landing, one unit per tick.
fn camera_step(state: &mut GameState) {
    if state.scroll_counter > 0.0 {
        state.camera_y += 1.0;
        state.scroll_counter -= 1.0;
    }
}
