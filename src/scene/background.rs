use std::f32::consts::TAU;

use crate::data::ScreenConfig;
use crate::math::{SeededRng, Vec2};
use crate::render::{Canvas, Color};

const SUN_RADIUS: f32 = 30.0;
const SUN_RAYS: usize = 12;
const CLOUD_COUNT: usize = 3;
const PUFFS_PER_CLOUD: usize = 5;
/// Depth of the dark topsoil band under the surface
const TOPSOIL_DEPTH: f32 = 50.0;
const GRASS_SPACING: usize = 10;

/// A single grass blade rising from the ground line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrassBlade {
    pub x: f32,
    /// Y coordinate of the blade tip
    pub top: f32,
}

/// Place a blade every few pixels with a little random sway and height
pub fn generate_grass(screen: &ScreenConfig, rng: &mut SeededRng) -> Vec<GrassBlade> {
    let ground = screen.ground_level as f32;
    (0..screen.width as usize)
        .step_by(GRASS_SPACING)
        .map(|x| GrassBlade {
            x: (x as i32 + rng.range(-5, 5)) as f32,
            top: ground - rng.range(5, 20) as f32,
        })
        .collect()
}

pub fn draw_sun<C: Canvas + ?Sized>(canvas: &mut C, screen: &ScreenConfig) {
    let center = Vec2::new(screen.width as f32 - 100.0, 100.0);

    canvas.set_color(Color::SUN);
    canvas.set_line_width(1.0);
    canvas.fill_circle(center, SUN_RADIUS);

    for i in 0..SUN_RAYS {
        let dir = Vec2::from_angle(i as f32 * TAU / SUN_RAYS as f32);
        canvas.line(center + (dir * 35.0).trunc(), center + (dir * 50.0).trunc());
    }
}

pub fn draw_clouds<C: Canvas + ?Sized>(canvas: &mut C) {
    canvas.set_color(Color::WHITE);

    for cloud in 0..CLOUD_COUNT as i32 {
        let cloud_x = 100 + cloud * 200;
        let cloud_y = 80 + (cloud * 17) % 50;

        for i in 0..PUFFS_PER_CLOUD as i32 {
            let puff = Vec2::new(
                (cloud_x + i * 25) as f32,
                (cloud_y + (i * 13) % 20 - 10) as f32,
            );
            canvas.fill_circle(puff, (20 + (i * 7) % 10) as f32);
        }
    }
}

/// Topsoil, deeper soil and grass.
///
/// `view_min`/`view_max` bound the world area in view; the soil is
/// stretched to cover it when the camera is zoomed.
pub fn draw_soil<C: Canvas + ?Sized>(
    canvas: &mut C,
    screen: &ScreenConfig,
    grass: &[GrassBlade],
    view_min: Vec2,
    view_max: Vec2,
) {
    let ground = screen.ground_level as f32;
    let left = view_min.x.min(0.0);
    let right = view_max.x.max(screen.width as f32);
    let bottom = view_max.y.max(screen.height as f32);

    canvas.set_color(Color::DARK_BROWN);
    canvas.fill_rect(Vec2::new(left, ground), Vec2::new(right, ground + TOPSOIL_DEPTH));

    canvas.set_color(Color::SOIL);
    canvas.fill_rect(Vec2::new(left, ground + TOPSOIL_DEPTH), Vec2::new(right, bottom));

    canvas.set_color(Color::GRASS);
    canvas.set_line_width(1.0);
    for blade in grass {
        canvas.line(Vec2::new(blade.x, ground), Vec2::new(blade.x, blade.top));
    }
}
