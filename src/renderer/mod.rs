//! Drawing surface abstraction
//!
//! The simulation only ever fades the frame and fills circles, so the whole
//! rendering contract is the [`Surface`] trait. Backends:
//! - `CanvasSurface`: browser 2D canvas (wasm32 only)
//! - [`RecordingSurface`]: captures draw calls for the native demo and tests

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::Color;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visible drawing region, in abstract units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        crate::viewport_center(self.width, self.height)
    }

    /// True when a circle lies entirely outside the viewport
    pub fn circle_outside(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius < 0.0
            || center.x - radius > self.width
            || center.y + radius < 0.0
            || center.y - radius > self.height
    }
}

/// Something the game loop can draw on
pub trait Surface {
    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Cover the whole viewport with translucent black (1.0 = hard clear)
    fn clear_with_fade(&mut self, alpha: f32);

    /// Fill a circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: &Color, alpha: f32);
}
