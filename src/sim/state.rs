//! Game state and core simulation types
//!
//! A session owns one [`GameState`]: the ordered stack of boxes, the single
//! debris fragment, current speeds, score, camera offset, and mode. It is
//! mutated once per tick and frozen once the mode reaches `GameOver`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current mode of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The current box oscillates horizontally at the top of the view
    Bounce,
    /// The current box descends toward the stack
    Fall,
    /// Run ended; ticking is a no-op
    GameOver,
}

/// An RGB box color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// One box in the stack
///
/// `y` is the logical height of the box's bottom edge above the ground;
/// rendering flips it into screen space. Box 0 is the fixed base and never
/// moves after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub color: Color,
}

impl StackBox {
    /// Right edge in logical coordinates
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Logical height of the box's top surface (the next landing plane)
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + BOX_HEIGHT
    }
}

/// The sliced-off portion of the most recently landed box
///
/// Purely decorative: it never collides and is overwritten (not accumulated)
/// on each landing. A zero width means "no debris".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debris {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl Debris {
    pub const NONE: Debris = Debris {
        x: 0.0,
        y: 0.0,
        width: 0.0,
    };
}

/// Complete game state for one play session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Session seed (box colors only; physics is seed-independent)
    pub seed: u64,
    /// Ordered stack, base first; grows by one per successful landing
    pub boxes: Vec<StackBox>,
    /// Index of the box presently bouncing or falling
    pub current: usize,
    /// Latest debris fragment
    pub debris: Debris,
    pub mode: Mode,
    /// Signed horizontal speed; sign flips on wall contact, magnitude grows
    /// by 1 per landing
    pub x_speed: f32,
    /// Unsigned vertical fall speed
    pub y_speed: f32,
    /// Remaining camera-scroll ticks owed after a landing
    pub scroll_counter: f32,
    /// Cumulative vertical scroll offset, monotonically non-decreasing
    pub camera_y: f32,
    /// Boxes successfully stacked
    pub score: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session: base box seeded, second box spawned, bouncing.
    pub fn new(seed: u64) -> Self {
        let base = StackBox {
            x: PLAYFIELD_WIDTH / 2.0 - INITIAL_BOX_WIDTH / 2.0,
            y: BASE_BOX_Y,
            width: INITIAL_BOX_WIDTH,
            color: Color::WHITE,
        };

        let mut state = Self {
            seed,
            boxes: vec![base],
            current: 1,
            debris: Debris::NONE,
            mode: Mode::Bounce,
            x_speed: INITIAL_X_SPEED,
            y_speed: INITIAL_Y_SPEED,
            scroll_counter: 0.0,
            camera_y: 0.0,
            score: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_box();
        state
    }

    /// Re-initialize for a new session. Callable in any mode, including
    /// mid-`GameOver`.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
        log::info!("session reset (seed {seed})");
    }

    /// Append the next box: full width of the stack top, spawned high above
    /// it, at the left wall.
    pub fn spawn_box(&mut self) {
        let index = self.boxes.len();
        let width = self.boxes[index - 1].width;
        let color = self.step_color(index);
        self.boxes.push(StackBox {
            x: 0.0,
            y: (index + SPAWN_ROW_OFFSET) as f32 * BOX_HEIGHT,
            width,
            color,
        });
    }

    /// Box color for a stack index: white for the base and the first dropped
    /// box, uniform random RGB afterwards. Visual-only rule.
    fn step_color(&mut self, index: usize) -> Color {
        if index <= 1 {
            return Color::WHITE;
        }
        Color {
            r: self.rng.random(),
            g: self.rng.random(),
            b: self.rng.random(),
        }
    }

    /// The box presently bouncing or falling.
    ///
    /// Panics if `current` is outside the stack; that is a programming
    /// invariant violation, not a recoverable condition.
    #[inline]
    pub fn current_box(&self) -> &StackBox {
        &self.boxes[self.current]
    }

    /// The stack top the current box must land on.
    #[inline]
    pub fn previous_box(&self) -> &StackBox {
        &self.boxes[self.current - 1]
    }
}
