use crate::math::Vec2;

/// Uniform zoom plus translation applied to world coordinates.
///
/// `screen = world * zoom + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f32,
    pub offset: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Camera {
    pub const IDENTITY: Camera = Camera {
        zoom: 1.0,
        offset: Vec2::ZERO,
    };

    /// Camera that has travelled `progress` of the way from identity to
    /// `max_zoom` with `focus` pulled into the middle of the screen.
    pub fn focused(focus: Vec2, screen_center: Vec2, max_zoom: f32, progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let zoom = 1.0 + (max_zoom - 1.0) * progress;
        let desired = focus.lerp(&screen_center, progress);
        Self {
            zoom,
            offset: desired - focus.scale(zoom),
        }
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        point.scale(self.zoom) + self.offset
    }

    /// Screen point back to world space
    pub fn unapply(&self, point: Vec2) -> Vec2 {
        (point - self.offset).scale(1.0 / self.zoom)
    }

    /// Scale a length (radius, line width)
    pub fn apply_len(&self, len: f32) -> f32 {
        len * self.zoom
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
