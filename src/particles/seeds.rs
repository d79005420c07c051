//! Falling seed particles
//!
//! A dispersed seed drops from the crown under constant gravity, spinning
//! as it falls, and comes to rest a fixed depth below the ground surface.

use crate::data::LifeCycleConfig;
use crate::math::Vec2;

/// Per-frame physics constants for falling seeds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedPhysics {
    pub gravity: f32,
    pub spin: f32,
    /// Y coordinate at which a seed stops and is buried
    pub rest_y: f32,
}

impl SeedPhysics {
    pub fn from_config(config: &LifeCycleConfig) -> Self {
        Self {
            gravity: config.seed.gravity,
            spin: config.seed.spin,
            rest_y: config.screen.ground_level as f32 + config.seed.burial_depth,
        }
    }
}

/// A single falling seed
#[derive(Debug, Clone, PartialEq)]
pub struct FallingSeed {
    pub position: Vec2,
    /// Rotation in radians
    pub angle: f32,
    pub velocity_y: f32,
    /// False once the seed has landed
    pub active: bool,
}

impl FallingSeed {
    /// Seed released at rest
    pub fn released(position: Vec2) -> Self {
        Self {
            position,
            angle: 0.0,
            velocity_y: 0.0,
            active: true,
        }
    }

    /// Advance one frame. Returns the resting point on the frame the seed lands.
    pub fn step(&mut self, physics: &SeedPhysics) -> Option<Vec2> {
        if !self.active {
            return None;
        }

        self.velocity_y += physics.gravity;
        self.position.y += self.velocity_y;
        self.angle += physics.spin;

        if self.position.y >= physics.rest_y {
            self.active = false;
            return Some(Vec2::new(self.position.x, physics.rest_y));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> SeedPhysics {
        SeedPhysics::from_config(&LifeCycleConfig::default())
    }

    #[test]
    fn test_rest_height_from_config() {
        assert_eq!(physics().rest_y, 530.0);
    }

    #[test]
    fn test_gravity_accelerates() {
        let mut seed = FallingSeed::released(Vec2::new(450.0, 300.0));
        seed.step(&physics());
        assert_eq!(seed.velocity_y, 0.5);
        assert_eq!(seed.position.y, 300.5);

        seed.step(&physics());
        assert_eq!(seed.velocity_y, 1.0);
        assert_eq!(seed.position.y, 301.5);
        assert!((seed.angle - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_lands_at_rest_height() {
        let physics = physics();
        let mut seed = FallingSeed::released(Vec2::new(450.0, 300.0));

        let mut landing = None;
        let mut frames = 0;
        while landing.is_none() {
            landing = seed.step(&physics);
            frames += 1;
            assert!(frames < 1000, "seed never landed");
        }

        // 230 px at 0.5 px/frame^2: n(n+1)/4 >= 230 first holds at n = 30
        assert_eq!(frames, 30);
        assert_eq!(landing, Some(Vec2::new(450.0, 530.0)));
        assert!(!seed.active);
    }

    #[test]
    fn test_inactive_seed_stays_put() {
        let mut seed = FallingSeed::released(Vec2::new(10.0, 600.0));
        assert!(seed.step(&physics()).is_some());

        let resting = seed.clone();
        assert_eq!(seed.step(&physics()), None);
        assert_eq!(seed, resting);
    }
}
