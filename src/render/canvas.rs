use crate::math::Vec2;
use super::color::Color;

/// Font height of the phase title
pub const TITLE_FONT_PX: f32 = 16.0;
/// Font height of the key help line
pub const HELP_FONT_PX: f32 = 8.0;

/// Immediate-mode 2D drawing surface.
///
/// Drawing state (colour, line width) is sticky, like a pen: it applies to
/// every primitive until changed. Nothing reaches the screen until
/// [`Canvas::present`] swaps the back buffer in.
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Colour used for both strokes and fills
    fn set_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn line(&mut self, from: Vec2, to: Vec2);

    /// Filled ellipse with radii `rx`/`ry`, rotated clockwise by `rotation` radians
    fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, rotation: f32);

    fn fill_rect(&mut self, top_left: Vec2, bottom_right: Vec2);

    /// Text whose top-left corner sits at `position`
    fn text(&mut self, position: Vec2, text: &str, font_px: f32);

    /// Show the finished frame
    fn present(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.fill_ellipse(center, radius, radius, 0.0);
    }
}
