//! Tree life cycle state machine
//!
//! Stepped once per frame. Each phase runs for a fixed number of frames
//! (dispersal additionally waits for its seed to land) and interpolates the
//! growth and flower scales that the renderer reads back.

use log::{debug, info};

use super::camera::Camera;
use super::easing::{Easing, ease, lerp};
use super::phase::Phase;
use crate::data::LifeCycleConfig;
use crate::math::Vec2;
use crate::particles::{FallingSeed, SeedPhysics};

/// Margin kept between a replanted seed and the screen edges
const REPLANT_MARGIN: f32 = 100.0;
/// Germination frames over which the buried seed grows by one unit of scale
const SWELL_FRAMES: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct LifeCycle {
    config: LifeCycleConfig,
    physics: SeedPhysics,
    phase: Phase,
    /// Frames spent in the current phase
    phase_timer: u32,
    /// 0.0 = no tree, 1.0 = fully grown
    growth_scale: f32,
    flower_scale: f32,
    show_flowers: bool,
    seeds: Vec<FallingSeed>,
    /// Where the current tree sprouts from
    seed_position: Vec2,
    /// Where this cycle's dispersed seed came to rest
    landing: Option<Vec2>,
    camera: Camera,
    camera_focus: Vec2,
    cycles: u32,
}

impl LifeCycle {
    pub fn new(config: LifeCycleConfig) -> Self {
        let physics = SeedPhysics::from_config(&config);
        let seed_position = Self::centre_seed(&config);
        Self {
            config,
            physics,
            phase: Phase::Germination,
            phase_timer: 0,
            growth_scale: 0.0,
            flower_scale: 0.0,
            show_flowers: false,
            seeds: Vec::new(),
            seed_position,
            landing: None,
            camera: Camera::IDENTITY,
            camera_focus: seed_position,
            cycles: 0,
        }
    }

    fn centre_seed(config: &LifeCycleConfig) -> Vec2 {
        Vec2::new(
            (config.screen.width / 2) as f32,
            config.screen.ground_level as f32 + config.seed.burial_depth,
        )
    }

    /// Restart from a seed in the middle of the screen
    pub fn restart(&mut self) {
        info!("restarting life cycle");
        self.clear_state();
        self.seed_position = Self::centre_seed(&self.config);
        self.cycles = 0;
    }

    /// End of the reset phase: the landed seed germinates next
    fn replant(&mut self) {
        let width = self.config.screen.width as f32;
        let next = match self.landing {
            Some(spot) => {
                let x = if width > 2.0 * REPLANT_MARGIN {
                    spot.x.clamp(REPLANT_MARGIN, width - REPLANT_MARGIN)
                } else {
                    width / 2.0
                };
                Vec2::new(x, spot.y)
            }
            None => Self::centre_seed(&self.config),
        };

        self.clear_state();
        self.seed_position = next;
        self.cycles += 1;
        info!(
            "cycle {} complete, replanting at x={}",
            self.cycles, self.seed_position.x
        );
    }

    fn clear_state(&mut self) {
        self.phase = Phase::Germination;
        self.phase_timer = 0;
        self.growth_scale = 0.0;
        self.flower_scale = 0.0;
        self.show_flowers = false;
        self.seeds.clear();
        self.landing = None;
        self.camera = Camera::IDENTITY;
    }

    /// Advance by one frame
    pub fn update(&mut self) {
        self.phase_timer += 1;
        let frames = self.phase_frames();
        let t = self.phase_timer;
        let progress = ease(t as f32 / frames as f32, Easing::Linear);

        match self.phase {
            Phase::Germination => {
                if t < frames {
                    self.growth_scale = 0.0;
                } else {
                    self.advance();
                }
            }
            Phase::Seedling => {
                if t < frames {
                    self.growth_scale = self.config.tree.seedling_scale;
                } else {
                    self.advance();
                }
            }
            Phase::Growth => {
                if t < frames {
                    self.growth_scale = lerp(self.config.tree.seedling_scale, 1.0, progress);
                } else {
                    self.advance();
                    self.show_flowers = true;
                }
            }
            Phase::Flowering => {
                if t < frames {
                    self.flower_scale = progress;
                } else {
                    self.advance();
                    self.release_seed();
                }
            }
            Phase::Dispersal => {
                self.update_seeds();
                let all_landed = self.seeds.iter().all(|s| !s.active);
                if all_landed && t > frames {
                    self.advance();
                }
            }
            Phase::Reset => {
                if t < frames {
                    self.growth_scale = 1.0 - progress;
                    self.flower_scale = 1.0 - progress;
                } else {
                    self.replant();
                }
            }
        }

        self.update_camera();
    }

    fn phase_frames(&self) -> u32 {
        let timing = &self.config.timing;
        match self.phase {
            Phase::Germination => timing.germination_frames,
            Phase::Seedling => timing.seedling_frames,
            Phase::Growth => timing.growth_frames,
            Phase::Flowering => timing.flowering_frames,
            Phase::Dispersal => timing.dispersal_min_frames,
            Phase::Reset => timing.reset_frames,
        }
        .max(1)
    }

    fn advance(&mut self) {
        let next = self.phase.next();
        debug!("{} -> {}", self.phase, next);
        self.phase = next;
        self.phase_timer = 0;
    }

    /// Drop a single seed from the crown, alternating sides each cycle
    fn release_seed(&mut self) {
        let side = if self.cycles % 2 == 0 { 1.0 } else { -1.0 };
        let position = Vec2::new(
            self.seed_position.x + self.config.seed.drift * side,
            self.config.screen.ground_level as f32 - self.config.seed.spawn_height,
        );
        debug!("releasing seed at ({}, {})", position.x, position.y);
        self.seeds.clear();
        self.seeds.push(FallingSeed::released(position));
    }

    fn update_seeds(&mut self) {
        for seed in &mut self.seeds {
            if let Some(spot) = seed.step(&self.physics) {
                debug!("seed landed at x={}", spot.x);
                self.landing = Some(spot);
            }
        }
    }

    fn update_camera(&mut self) {
        let progress = match self.phase {
            Phase::Dispersal => {
                if let Some(seed) = self.seeds.first() {
                    self.camera_focus = seed.position;
                }
                let zoom_frames = self.config.camera.zoom_frames.max(1);
                ease(self.phase_timer as f32 / zoom_frames as f32, Easing::EaseInOut)
            }
            Phase::Reset => {
                let frames = self.phase_frames();
                ease(1.0 - self.phase_timer as f32 / frames as f32, Easing::EaseInOut)
            }
            _ => 0.0,
        };

        self.camera = if progress > 0.0 {
            let screen = &self.config.screen;
            let center = Vec2::new(screen.width as f32 / 2.0, screen.height as f32 / 2.0);
            Camera::focused(self.camera_focus, center, self.config.camera.max_zoom, progress)
        } else {
            Camera::IDENTITY
        };
    }

    /// Scale of the buried seed; above 1.0 it shows a sprout
    pub fn sprout_scale(&self) -> f32 {
        match self.phase {
            Phase::Germination => 1.0 + self.phase_timer as f32 / SWELL_FRAMES,
            Phase::Seedling => 3.0,
            _ => 1.0,
        }
    }

    pub fn config(&self) -> &LifeCycleConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_timer(&self) -> u32 {
        self.phase_timer
    }

    pub fn growth_scale(&self) -> f32 {
        self.growth_scale
    }

    pub fn flower_scale(&self) -> f32 {
        self.flower_scale
    }

    pub fn flowers_shown(&self) -> bool {
        self.show_flowers
    }

    pub fn seeds(&self) -> &[FallingSeed] {
        &self.seeds
    }

    pub fn seed_position(&self) -> Vec2 {
        self.seed_position
    }

    pub fn landing(&self) -> Option<Vec2> {
        self.landing
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn cycles_completed(&self) -> u32 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> LifeCycle {
        LifeCycle::new(LifeCycleConfig::default())
    }

    /// Step until the phase changes, returning the number of updates taken
    fn run_until_phase_changes(lc: &mut LifeCycle) -> u32 {
        let start = lc.phase();
        let mut frames = 0;
        while lc.phase() == start {
            lc.update();
            frames += 1;
            assert!(frames < 10_000, "stuck in {:?}", start);
        }
        frames
    }

    fn run_until(lc: &mut LifeCycle, phase: Phase) {
        let mut guard = 0;
        while lc.phase() != phase {
            lc.update();
            guard += 1;
            assert!(guard < 10_000, "never reached {:?}", phase);
        }
    }

    #[test]
    fn test_initial_state() {
        let lc = cycle();
        assert_eq!(lc.phase(), Phase::Germination);
        assert_eq!(lc.phase_timer(), 0);
        assert_eq!(lc.growth_scale(), 0.0);
        assert_eq!(lc.seed_position(), Vec2::new(400.0, 530.0));
        assert!(lc.camera().is_identity());
        assert!(lc.seeds().is_empty());
    }

    #[test]
    fn test_phase_durations() {
        let mut lc = cycle();
        assert_eq!(run_until_phase_changes(&mut lc), 60);
        assert_eq!(lc.phase(), Phase::Seedling);
        assert_eq!(run_until_phase_changes(&mut lc), 80);
        assert_eq!(lc.phase(), Phase::Growth);
        assert_eq!(run_until_phase_changes(&mut lc), 150);
        assert_eq!(lc.phase(), Phase::Flowering);
        assert_eq!(run_until_phase_changes(&mut lc), 80);
        assert_eq!(lc.phase(), Phase::Dispersal);
        // Seed lands after 30 frames, but dispersal lasts until timer > 50
        assert_eq!(run_until_phase_changes(&mut lc), 51);
        assert_eq!(lc.phase(), Phase::Reset);
        assert_eq!(run_until_phase_changes(&mut lc), 50);
        assert_eq!(lc.phase(), Phase::Germination);
    }

    #[test]
    fn test_seedling_holds_small_scale() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Seedling);
        lc.update();
        assert!((lc.growth_scale() - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_growth_interpolates_to_full() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Growth);

        let mut prev = 0.0;
        for _ in 0..149 {
            lc.update();
            assert!(lc.growth_scale() >= prev);
            assert!(lc.growth_scale() <= 1.0);
            prev = lc.growth_scale();
        }
        // 0.15 + 149/150 * 0.85
        assert!((lc.growth_scale() - 0.99433).abs() < 1e-4);
        assert_eq!(lc.phase(), Phase::Growth);
        assert!(!lc.flowers_shown());

        lc.update();
        assert_eq!(lc.phase(), Phase::Flowering);
        assert!(lc.flowers_shown());
    }

    #[test]
    fn test_flowering_spawns_one_seed() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Flowering);
        lc.update();
        assert!((lc.flower_scale() - 1.0 / 80.0).abs() < 1e-6);

        run_until(&mut lc, Phase::Dispersal);
        assert_eq!(lc.seeds().len(), 1);
        let seed = &lc.seeds()[0];
        assert!(seed.active);
        assert_eq!(seed.position, Vec2::new(450.0, 300.0));
        assert_eq!(seed.velocity_y, 0.0);
    }

    #[test]
    fn test_dispersal_lands_seed_without_moving_tree() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Dispersal);
        for _ in 0..30 {
            lc.update();
        }
        assert!(!lc.seeds()[0].active);
        assert_eq!(lc.landing(), Some(Vec2::new(450.0, 530.0)));
        assert_eq!(lc.seed_position(), Vec2::new(400.0, 530.0));
    }

    #[test]
    fn test_camera_zooms_during_dispersal_and_returns() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Dispersal);

        for _ in 0..40 {
            lc.update();
        }
        assert!((lc.camera().zoom - 2.0).abs() < 1e-5);
        // Landed seed is held at the centre of the screen
        let focus = lc.camera().apply(lc.seeds()[0].position);
        assert!(focus.distance(&Vec2::new(400.0, 300.0)) < 0.01);

        run_until(&mut lc, Phase::Reset);
        let mut prev_zoom = lc.camera().zoom;
        for _ in 0..49 {
            lc.update();
            assert!(lc.camera().zoom <= prev_zoom + 1e-6);
            prev_zoom = lc.camera().zoom;
        }
        lc.update();
        assert_eq!(lc.phase(), Phase::Germination);
        assert!(lc.camera().is_identity());
    }

    #[test]
    fn test_camera_identity_outside_dispersal() {
        let mut lc = cycle();
        for _ in 0..300 {
            lc.update();
            assert!(lc.camera().is_identity(), "camera moved in {:?}", lc.phase());
        }
    }

    #[test]
    fn test_reset_fades_scales() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Reset);
        lc.update();
        assert!((lc.growth_scale() - 0.98).abs() < 1e-5);
        assert!((lc.flower_scale() - 0.98).abs() < 1e-5);
        for _ in 0..48 {
            lc.update();
        }
        assert!((lc.growth_scale() - 0.02).abs() < 1e-5);
    }

    #[test]
    fn test_cycle_replants_landed_seed() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Reset);
        run_until(&mut lc, Phase::Germination);

        assert_eq!(lc.cycles_completed(), 1);
        assert_eq!(lc.seed_position(), Vec2::new(450.0, 530.0));
        assert_eq!(lc.growth_scale(), 0.0);
        assert_eq!(lc.flower_scale(), 0.0);
        assert!(!lc.flowers_shown());
        assert!(lc.seeds().is_empty());
    }

    #[test]
    fn test_seeds_alternate_sides() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Reset);
        run_until(&mut lc, Phase::Dispersal);
        // Second cycle drops to the left of the replanted tree
        assert_eq!(lc.seeds()[0].position.x, 400.0);

        run_until(&mut lc, Phase::Reset);
        run_until(&mut lc, Phase::Germination);
        assert_eq!(lc.seed_position().x, 400.0);
        assert_eq!(lc.cycles_completed(), 2);
    }

    #[test]
    fn test_replant_clamped_to_screen() {
        let mut config = LifeCycleConfig::default();
        config.seed.drift = 500.0;
        let mut lc = LifeCycle::new(config);
        run_until(&mut lc, Phase::Reset);
        run_until(&mut lc, Phase::Germination);
        assert_eq!(lc.seed_position().x, 700.0);
    }

    #[test]
    fn test_restart_returns_to_centre() {
        let mut lc = cycle();
        run_until(&mut lc, Phase::Reset);
        run_until(&mut lc, Phase::Germination);
        run_until(&mut lc, Phase::Dispersal);
        lc.update();

        lc.restart();
        assert_eq!(lc.phase(), Phase::Germination);
        assert_eq!(lc.phase_timer(), 0);
        assert_eq!(lc.growth_scale(), 0.0);
        assert!(lc.seeds().is_empty());
        assert!(lc.camera().is_identity());
        assert_eq!(lc.seed_position(), Vec2::new(400.0, 530.0));
        assert_eq!(lc.cycles_completed(), 0);
    }

    #[test]
    fn test_sprout_scale_grows_through_germination() {
        let mut lc = cycle();
        assert_eq!(lc.sprout_scale(), 1.0);
        for _ in 0..30 {
            lc.update();
        }
        assert!((lc.sprout_scale() - 1.6).abs() < 1e-6);
        for _ in 0..29 {
            lc.update();
        }
        // Last germination frame, then the seedling jumps to full size
        assert_eq!(lc.phase(), Phase::Germination);
        assert!((lc.sprout_scale() - 2.18).abs() < 1e-5);
        run_until(&mut lc, Phase::Seedling);
        assert_eq!(lc.sprout_scale(), 3.0);
        run_until(&mut lc, Phase::Growth);
        assert_eq!(lc.sprout_scale(), 1.0);
    }

    #[test]
    fn test_scales_stay_in_unit_range_over_cycles() {
        let mut lc = cycle();
        for _ in 0..2_000 {
            lc.update();
            assert!((0.0..=1.0).contains(&lc.growth_scale()));
            assert!((0.0..=1.0).contains(&lc.flower_scale()));
        }
        assert!(lc.cycles_completed() >= 3);
    }
}
