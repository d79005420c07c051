/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS colour string for the 2D canvas API
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    pub const BARK: Color = Color::rgb(139, 69, 19);
    pub const DARK_BROWN: Color = Color::rgb(101, 67, 33);
    pub const SOIL: Color = Color::rgb(90, 50, 20);
    pub const LEAF_GREEN: Color = Color::rgb(34, 139, 34);
    pub const LIGHT_GREEN: Color = Color::rgb(50, 205, 50);
    pub const GRASS: Color = Color::rgb(0, 170, 0);
    pub const SEED: Color = Color::rgb(160, 82, 45);
    pub const PETAL: Color = Color::rgb(170, 0, 170);
    pub const SUN: Color = Color::rgb(255, 255, 85);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}
