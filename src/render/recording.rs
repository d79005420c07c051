//! Headless canvas that records every primitive
//!
//! Used for tests and for frame analysis without a browser.

use crate::math::Vec2;
use super::canvas::Canvas;
use super::color::Color;

/// A primitive with the pen state it was drawn with
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    Ellipse {
        center: Vec2,
        rx: f32,
        ry: f32,
        rotation: f32,
        color: Color,
    },
    Rect {
        top_left: Vec2,
        bottom_right: Vec2,
        color: Color,
    },
    Text {
        position: Vec2,
        text: String,
        font_px: f32,
        color: Color,
    },
    Present,
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    color: Color,
    line_width: f32,
    presented: usize,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            color: Color::WHITE,
            line_width: 1.0,
            presented: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands since the most recent clear, i.e. the frame being drawn
    /// or the last one presented
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn frames_presented(&self) -> usize {
        self.presented
    }

    /// Forget recorded commands, keeping pen state and frame count
    pub fn clear_history(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.color,
            width: self.line_width,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, rotation: f32) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            rx,
            ry,
            rotation,
            color: self.color,
        });
    }

    fn fill_rect(&mut self, top_left: Vec2, bottom_right: Vec2) {
        self.commands.push(DrawCommand::Rect {
            top_left,
            bottom_right,
            color: self.color,
        });
    }

    fn text(&mut self, position: Vec2, text: &str, font_px: f32) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            font_px,
            color: self.color,
        });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.presented += 1;
    }
}
