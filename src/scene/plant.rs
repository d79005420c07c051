//! Seed, seedling, tree and flowers

use std::f32::consts::TAU;

use crate::growth::{BranchKind, TreeElement};
use crate::math::Vec2;
use crate::render::{Canvas, Color};

const SEED_RADIUS: f32 = 8.0;
const SEED_ASPECT: f32 = 0.6;
/// Sprout length per unit of seed scale above 1.0
const SPROUT_GROWTH: f32 = 20.0;
const PETALS: usize = 5;
/// Growth scale above which the tree stands on a visible base
const BASE_MIN_SCALE: f32 = 0.2;

fn sprout_length(scale: f32) -> f32 {
    ((scale - 1.0) * SPROUT_GROWTH).trunc()
}

/// Oval seed rotated by `angle`. A scale above 1.0 swells the seed and
/// grows a sprout straight up out of it.
pub fn draw_seed<C: Canvas + ?Sized>(canvas: &mut C, center: Vec2, angle: f32, scale: f32) {
    let rx = (SEED_RADIUS * scale).trunc();
    let ry = (rx * SEED_ASPECT).trunc();

    canvas.set_color(Color::SEED);
    canvas.fill_ellipse(center, rx, ry, angle);

    if scale > 1.0 {
        canvas.set_color(Color::LIGHT_GREEN);
        canvas.set_line_width(1.0);
        canvas.line(center, center - Vec2::new(0.0, sprout_length(scale)));
    }
}

/// Pair of small leaves opening at the tip of the sprout
pub fn draw_seedling_leaves<C: Canvas + ?Sized>(canvas: &mut C, seed: Vec2, sprout_scale: f32) {
    if sprout_scale <= 1.0 {
        return;
    }
    let tip = seed - Vec2::new(0.0, sprout_length(sprout_scale));

    canvas.set_color(Color::LIGHT_GREEN);
    canvas.fill_ellipse(tip - Vec2::new(7.0, 0.0), 7.0, 3.0, 0.4);
    canvas.fill_ellipse(tip + Vec2::new(7.0, 0.0), 7.0, 3.0, -0.4);
}

/// Draw grown tree elements in order. Flower sites bloom only when
/// `flower_scale` is given.
pub fn draw_tree<C: Canvas + ?Sized>(
    canvas: &mut C,
    elements: &[TreeElement],
    flower_scale: Option<f32>,
) {
    for element in elements {
        match element {
            TreeElement::Branch { start, end, width, kind, .. } => {
                canvas.set_color(match kind {
                    BranchKind::Bark => Color::BARK,
                    BranchKind::Twig => Color::LEAF_GREEN,
                });
                canvas.set_line_width(*width);
                canvas.line(*start, *end);
            }
            TreeElement::Leaf { center, radius } => {
                canvas.set_color(Color::LIGHT_GREEN);
                canvas.fill_circle(*center, *radius);
            }
            TreeElement::FlowerSite(site) => {
                if let Some(scale) = flower_scale {
                    draw_flower(canvas, *site, scale);
                }
            }
        }
    }
}

/// Mound of earth around the foot of the trunk
pub fn draw_tree_base<C: Canvas + ?Sized>(canvas: &mut C, foot: Vec2, scale: f32) {
    if scale <= BASE_MIN_SCALE {
        return;
    }
    let half_width = (30.0 * scale).trunc();
    canvas.set_color(Color::DARK_BROWN);
    canvas.fill_rect(
        Vec2::new(foot.x - half_width, foot.y - 10.0),
        Vec2::new(foot.x + half_width, foot.y + 20.0),
    );
}

/// Five petals in a ring around a yellow centre
pub fn draw_flower<C: Canvas + ?Sized>(canvas: &mut C, center: Vec2, scale: f32) {
    if scale <= 0.0 {
        return;
    }
    let petal = (5.0 * scale).trunc();
    if petal <= 0.0 {
        return;
    }

    canvas.set_color(Color::PETAL);
    for i in 0..PETALS {
        let angle = i as f32 * TAU / PETALS as f32;
        let offset = Vec2::new(angle.cos(), angle.sin()) * petal;
        canvas.fill_circle(center + offset.trunc(), petal);
    }

    canvas.set_color(Color::SUN);
    canvas.fill_circle(center, petal);
}
