//! Drawing routines for everything in the scene
//!
//! Each routine takes any [`Canvas`](crate::render::Canvas), so the world
//! can be drawn through a camera adaptor and the HUD straight to screen.

pub mod background;
pub mod hud;
pub mod plant;

pub use background::{GrassBlade, draw_clouds, draw_soil, draw_sun, generate_grass};
pub use hud::{HELP_TEXT, draw_hud};
pub use plant::{draw_flower, draw_seed, draw_seedling_leaves, draw_tree, draw_tree_base};
