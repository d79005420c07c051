use crate::animation::Camera;
use crate::math::Vec2;
use super::canvas::Canvas;
use super::color::Color;

/// Canvas adaptor that pushes world coordinates through a [`Camera`]
/// before they reach the underlying surface. Widths and radii scale with
/// the zoom; `clear` and `present` pass straight through.
pub struct CameraCanvas<'a, C: Canvas + ?Sized> {
    inner: &'a mut C,
    camera: Camera,
}

impl<'a, C: Canvas + ?Sized> CameraCanvas<'a, C> {
    pub fn new(inner: &'a mut C, camera: Camera) -> Self {
        Self { inner, camera }
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }
}

impl<C: Canvas + ?Sized> Canvas for CameraCanvas<'_, C> {
    fn clear(&mut self, color: Color) {
        self.inner.clear(color);
    }

    fn set_color(&mut self, color: Color) {
        self.inner.set_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.inner.set_line_width(self.camera.apply_len(width));
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.inner.line(self.camera.apply(from), self.camera.apply(to));
    }

    fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, rotation: f32) {
        self.inner.fill_ellipse(
            self.camera.apply(center),
            self.camera.apply_len(rx),
            self.camera.apply_len(ry),
            rotation,
        );
    }

    fn fill_rect(&mut self, top_left: Vec2, bottom_right: Vec2) {
        self.inner
            .fill_rect(self.camera.apply(top_left), self.camera.apply(bottom_right));
    }

    fn text(&mut self, position: Vec2, text: &str, font_px: f32) {
        self.inner
            .text(self.camera.apply(position), text, self.camera.apply_len(font_px));
    }

    fn present(&mut self) {
        self.inner.present();
    }
}
