use crate::animation::Phase;
use crate::data::ScreenConfig;
use crate::math::Vec2;
use crate::render::canvas::{HELP_FONT_PX, TITLE_FONT_PX};
use crate::render::{Canvas, Color};

pub const HELP_TEXT: &str = "Press ESC to exit, SPACE to restart";

/// Phase title in the top-left corner and key help along the bottom
pub fn draw_hud<C: Canvas + ?Sized>(canvas: &mut C, phase: Phase, screen: &ScreenConfig) {
    canvas.set_color(Color::WHITE);
    canvas.text(Vec2::new(10.0, 10.0), &phase.to_string(), TITLE_FONT_PX);
    canvas.text(
        Vec2::new(10.0, screen.height as f32 - 20.0),
        HELP_TEXT,
        HELP_FONT_PX,
    );
}
