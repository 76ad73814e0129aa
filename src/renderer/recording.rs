//! Headless surface that records every draw call

use glam::Vec2;

use super::{Color, Surface, Viewport};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fade { alpha: f32 },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    },
}

/// Fixed-size surface that keeps the draw calls of the current frame
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    viewport: Viewport,
    /// Calls since the last fade (i.e. the current frame)
    pub commands: Vec<DrawCommand>,
    /// Frames started (fade calls) over the surface lifetime
    pub frames: u64,
    /// Circles drawn over the surface lifetime
    pub circles_drawn: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            commands: Vec::new(),
            frames: 0,
            circles_drawn: 0,
        }
    }

    /// Circles drawn in the current frame
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, &Color, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
                alpha,
            } => Some((*center, *radius, color, *alpha)),
            DrawCommand::Fade { .. } => None,
        })
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear_with_fade(&mut self, alpha: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Fade { alpha });
        self.frames += 1;
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: &Color, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: *color,
            alpha,
        });
        self.circles_drawn += 1;
    }
}
