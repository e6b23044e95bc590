//! Canvas-2D rendering
//!
//! The renderer is deliberately dumb: it fills rectangles from a
//! [`Scene`] and knows nothing about the simulation. Styling choices
//! (translucent background, red debris) are cosmetic defaults inherited
//! from the game's look.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{PLAYFIELD_WIDTH, VIEW_HEIGHT};
use crate::sim::{Color, Scene, ScreenRect};

/// Background fill, redrawn every frame (translucent so motion leaves a
/// faint trail)
const BACKGROUND: &str = "rgba(0, 0, 0, 0.5)";
/// Debris fill
const DEBRIS: &str = "red";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw one frame: background, stack boxes, debris.
    pub fn draw(&self, scene: &Scene) {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx
            .fill_rect(0.0, 0.0, PLAYFIELD_WIDTH as f64, VIEW_HEIGHT as f64);

        for (rect, color) in &scene.boxes {
            self.ctx.set_fill_style_str(&css_color(*color));
            self.fill(rect);
        }

        if let Some(rect) = &scene.debris {
            self.ctx.set_fill_style_str(DEBRIS);
            self.fill(rect);
        }
    }

    fn fill(&self, rect: &ScreenRect) {
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}

fn css_color(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}
