//! Drawing surface abstraction
//!
//! The scene painter only needs a handful of 2D primitives. The browser
//! backend maps them onto `CanvasRenderingContext2d`; `RecordingSurface`
//! keeps them in a list so scenes can be inspected without a browser.

use glam::Vec2;

/// Minimal immediate-mode 2D drawing target
pub trait DrawSurface {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn line(&mut self, from: Vec2, to: Vec2, color: [f32; 4], width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4], width: f32);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        from: Vec2,
        to: Vec2,
        color: [f32; 4],
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
        width: f32,
    },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }

    pub fn stroked_circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: [f32; 4], width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4], width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }
}
