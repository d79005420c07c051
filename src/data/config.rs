//! Animation configuration
//!
//! Every section is optional in YAML; missing fields fall back to the
//! defaults, which reproduce the classic 800x600 demo at ~30 FPS.

use serde::Deserialize;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    /// Y coordinate of the ground surface
    pub ground_level: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            ground_level: 450,
        }
    }
}

/// Phase lengths in frames
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub germination_frames: u32,
    pub seedling_frames: u32,
    pub growth_frames: u32,
    pub flowering_frames: u32,
    /// Dispersal lasts at least this long, and until every seed has landed
    pub dispersal_min_frames: u32,
    pub reset_frames: u32,
    pub frame_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            germination_frames: 60,
            seedling_frames: 80,
            growth_frames: 150,
            flowering_frames: 80,
            dispersal_min_frames: 50,
            reset_frames: 50,
            frame_interval_ms: 33,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub trunk_length: f32,
    /// Recursion depth of the branch fractal
    pub depth: u32,
    /// Angle between a side branch and its parent (radians)
    pub spread: f32,
    pub length_decay: f32,
    /// Extra shortening applied to the centre branch
    pub centre_decay: f32,
    /// Growth scale held during the seedling phase
    pub seedling_scale: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            trunk_length: 150.0,
            depth: 8,
            spread: 0.3,
            length_decay: 0.7,
            centre_decay: 0.8,
            seedling_scale: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Added to a falling seed's vertical velocity every frame
    pub gravity: f32,
    /// Rotation added every frame while falling (radians)
    pub spin: f32,
    /// Height above the ground where a dispersed seed is released
    pub spawn_height: f32,
    /// Horizontal distance between the parent tree and the released seed
    pub drift: f32,
    /// How far below the ground surface a seed comes to rest
    pub burial_depth: f32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            spin: 0.1,
            spawn_height: 150.0,
            drift: 50.0,
            burial_depth: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub max_zoom: f32,
    /// Frames the camera takes to reach full zoom during dispersal
    pub zoom_frames: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            max_zoom: 2.0,
            zoom_frames: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeCycleConfig {
    pub screen: ScreenConfig,
    pub timing: TimingConfig,
    pub tree: TreeConfig,
    pub seed: SeedConfig,
    pub camera: CameraConfig,
    /// Seed for grass placement and leaf jitter
    pub random_seed: u32,
}

impl Default for LifeCycleConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            timing: TimingConfig::default(),
            tree: TreeConfig::default(),
            seed: SeedConfig::default(),
            camera: CameraConfig::default(),
            random_seed: 42,
        }
    }
}

impl LifeCycleConfig {
    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: LifeCycleConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges, reporting the first offending field
    pub fn validate(&self) -> Result<()> {
        let screen = &self.screen;
        if screen.width == 0 {
            return Err(Error::invalid("screen.width", "must be positive"));
        }
        if screen.height == 0 {
            return Err(Error::invalid("screen.height", "must be positive"));
        }
        if screen.ground_level >= screen.height {
            return Err(Error::invalid(
                "screen.ground_level",
                format!("{} is not above the bottom edge ({})", screen.ground_level, screen.height),
            ));
        }

        let timing = &self.timing;
        for (field, frames) in [
            ("timing.germination_frames", timing.germination_frames),
            ("timing.seedling_frames", timing.seedling_frames),
            ("timing.growth_frames", timing.growth_frames),
            ("timing.flowering_frames", timing.flowering_frames),
            ("timing.reset_frames", timing.reset_frames),
            ("timing.frame_interval_ms", timing.frame_interval_ms),
        ] {
            if frames == 0 {
                return Err(Error::invalid(field, "must be at least 1"));
            }
        }

        if !(1..=10).contains(&self.tree.depth) {
            return Err(Error::invalid(
                "tree.depth",
                format!("{} is outside 1..=10", self.tree.depth),
            ));
        }
        for (field, value) in [
            ("tree.trunk_length", self.tree.trunk_length),
            ("tree.spread", self.tree.spread),
            ("tree.length_decay", self.tree.length_decay),
            ("tree.centre_decay", self.tree.centre_decay),
            ("tree.seedling_scale", self.tree.seedling_scale),
            ("seed.gravity", self.seed.gravity),
            ("seed.spin", self.seed.spin),
            ("seed.spawn_height", self.seed.spawn_height),
            ("seed.drift", self.seed.drift),
            ("seed.burial_depth", self.seed.burial_depth),
            ("camera.max_zoom", self.camera.max_zoom),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid(field, format!("{} is not a finite number", value)));
            }
        }

        if !(self.tree.trunk_length > 0.0) {
            return Err(Error::invalid("tree.trunk_length", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.tree.seedling_scale) {
            return Err(Error::invalid("tree.seedling_scale", "must be within [0, 1]"));
        }
        if !(self.seed.gravity > 0.0) {
            return Err(Error::invalid("seed.gravity", "must be positive"));
        }
        if !(self.camera.max_zoom >= 1.0) {
            return Err(Error::invalid("camera.max_zoom", "must be at least 1.0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LifeCycleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = LifeCycleConfig::from_yaml("{}").unwrap();
        assert_eq!(config, LifeCycleConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
screen:
  width: 1024
timing:
  growth_frames: 300
camera:
  max_zoom: 3.0
"#;
        let config = LifeCycleConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.screen.width, 1024);
        assert_eq!(config.screen.height, 600);
        assert_eq!(config.timing.growth_frames, 300);
        assert_eq!(config.timing.germination_frames, 60);
        assert_eq!(config.camera.max_zoom, 3.0);
        assert_eq!(config.random_seed, 42);
    }

    #[test]
    fn test_ground_below_screen_rejected() {
        let yaml = "screen:\n  height: 400\n  ground_level: 450\n";
        let err = LifeCycleConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "screen.ground_level", .. }));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let yaml = "timing:\n  flowering_frames: 0\n";
        let err = LifeCycleConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "timing.flowering_frames", .. }));
    }

    #[test]
    fn test_depth_range() {
        let yaml = "tree:\n  depth: 12\n";
        assert!(LifeCycleConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_zoom_out_rejected() {
        let yaml = "camera:\n  max_zoom: 0.5\n";
        let err = LifeCycleConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("camera.max_zoom"));
    }

    #[test]
    fn test_nan_rejected() {
        for (yaml, field) in [
            ("seed:\n  gravity: .nan\n", "seed.gravity"),
            ("camera:\n  max_zoom: .nan\n", "camera.max_zoom"),
            ("tree:\n  length_decay: .nan\n", "tree.length_decay"),
            ("seed:\n  drift: .inf\n", "seed.drift"),
        ] {
            match LifeCycleConfig::from_yaml(yaml) {
                Err(Error::InvalidConfig { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{} accepted: {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_malformed_yaml() {
        let err = LifeCycleConfig::from_yaml("screen: [").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }
}
