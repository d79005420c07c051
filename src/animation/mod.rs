//! Animation module for the tree life cycle
//!
//! Drives the phase state machine, the per-phase interpolation of growth
//! and flower scales, and the camera that follows a dispersed seed.

mod camera;
mod easing;
mod life_cycle;
mod phase;

pub use camera::Camera;
pub use easing::{Easing, ease, lerp};
pub use life_cycle::LifeCycle;
pub use phase::Phase;
