//! Screen-space projection for the render sink
//!
//! Converts logical box positions into camera-adjusted screen rectangles.
//! The external renderer draws filled rectangles and nothing else; it
//! performs no physics.

use glam::Vec2;

use super::state::{Color, GameState};
use crate::consts::*;

/// An axis-aligned screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl ScreenRect {
    /// Whether any part of the rectangle lies inside the viewport
    fn visible(&self) -> bool {
        self.pos.y + self.size.y > 0.0 && self.pos.y < VIEW_HEIGHT
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Visible stack boxes, base first
    pub boxes: Vec<(ScreenRect, Color)>,
    /// Debris fragment, when one exists and is on screen
    pub debris: Option<ScreenRect>,
    pub score: u32,
}

/// Project a logical height into screen space under the current camera.
#[inline]
pub fn screen_y(logical_y: f32, camera_y: f32) -> f32 {
    SCREEN_BASE_Y - logical_y + camera_y
}

/// Build the frame's scene from the game state.
pub fn scene(state: &GameState) -> Scene {
    let boxes = state
        .boxes
        .iter()
        .filter_map(|b| {
            let rect = ScreenRect {
                pos: Vec2::new(b.x, screen_y(b.y, state.camera_y)),
                size: Vec2::new(b.width, BOX_HEIGHT),
            };
            rect.visible().then_some((rect, b.color))
        })
        .collect();

    let debris = (state.debris.width > 0.0)
        .then(|| ScreenRect {
            pos: Vec2::new(state.debris.x, screen_y(state.debris.y, state.camera_y)),
            size: Vec2::new(state.debris.width, BOX_HEIGHT),
        })
        .filter(ScreenRect::visible);

    Scene {
        boxes,
        debris,
        score: state.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Debris;

    #[test]
    fn test_projection_formula() {
        assert_eq!(screen_y(200.0, 0.0), 400.0);
        assert_eq!(screen_y(200.0, 50.0), 450.0);
        assert_eq!(screen_y(600.0, 0.0), 0.0);
    }

    #[test]
    fn test_initial_scene() {
        let state = GameState::new(1);
        let scene = scene(&state);

        // Base box at screen y 400, spawned box at screen y 50
        assert_eq!(scene.boxes.len(), 2);
        assert_eq!(scene.boxes[0].0.pos, Vec2::new(60.0, 400.0));
        assert_eq!(scene.boxes[0].0.size, Vec2::new(200.0, BOX_HEIGHT));
        assert_eq!(scene.boxes[1].0.pos, Vec2::new(0.0, 50.0));
        assert_eq!(scene.debris, None);
        assert_eq!(scene.score, 0);
    }

    #[test]
    fn test_camera_shifts_everything_down() {
        let mut state = GameState::new(1);
        state.camera_y = 30.0;
        let scene = scene(&state);
        assert_eq!(scene.boxes[0].0.pos.y, 430.0);
        assert_eq!(scene.boxes[1].0.pos.y, 80.0);
    }

    #[test]
    fn test_scrolled_off_boxes_are_culled() {
        let mut state = GameState::new(1);
        // Enough scroll to push the base box past the bottom of the view
        state.camera_y = 200.0;
        let scene = scene(&state);
        assert!(
            scene
                .boxes
                .iter()
                .all(|(rect, _)| rect.pos.y < VIEW_HEIGHT),
        );
        assert_eq!(scene.boxes.len(), 1);
    }

    #[test]
    fn test_debris_rect_follows_fragment() {
        let mut state = GameState::new(1);
        state.debris = Debris {
            x: 120.0,
            y: 250.0,
            width: 40.0,
        };
        let scene = scene(&state);
        let rect = scene.debris.expect("debris should be visible");
        assert_eq!(rect.pos, Vec2::new(120.0, 350.0));
        assert_eq!(rect.size, Vec2::new(40.0, BOX_HEIGHT));
    }

    #[test]
    fn test_zero_width_debris_is_absent() {
        let state = GameState::new(1);
        assert_eq!(scene(&state).debris, None);
    }
}
