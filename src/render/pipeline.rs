use crate::animation::{LifeCycle, Phase};
use crate::data::{LifeCycleConfig, ScreenConfig};
use crate::growth::{BranchParams, grow_tree};
use crate::math::{SeededRng, Vec2};
use crate::scene::{
    GrassBlade, draw_clouds, draw_hud, draw_seed, draw_seedling_leaves, draw_soil, draw_sun,
    draw_tree, draw_tree_base, generate_grass,
};
use super::camera_canvas::CameraCanvas;
use super::canvas::Canvas;
use super::color::Color;

/// Height of the trunk's foot above the seed it grew from
const TRUNK_OFFSET: f32 = 20.0;
/// Below this growth scale no tree is drawn at all
const TREE_MIN_SCALE: f32 = 0.01;
/// Flowers only show on a nearly full-grown tree
const FLOWER_MIN_SCALE: f32 = 0.8;

/// Composes a complete frame from the life cycle state
pub struct FrameRenderer {
    screen: ScreenConfig,
    params: BranchParams,
    /// Placed once so the lawn stays still between frames and restarts
    grass: Vec<GrassBlade>,
    leaf_seed: u32,
}

impl FrameRenderer {
    pub fn new(config: &LifeCycleConfig) -> Self {
        let mut rng = SeededRng::new(config.random_seed);
        let grass = generate_grass(&config.screen, &mut rng);
        Self {
            screen: config.screen.clone(),
            params: BranchParams::from_config(&config.tree),
            grass,
            leaf_seed: config.random_seed.wrapping_add(1),
        }
    }

    /// Draw one frame and present it
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, state: &LifeCycle) {
        canvas.clear(Color::SKY_BLUE);
        // Sky stays put while the camera follows the seed
        draw_sun(canvas, &self.screen);
        draw_clouds(canvas);

        {
            let mut world = CameraCanvas::new(canvas, state.camera());
            self.draw_world(&mut world, state);
        }

        draw_hud(canvas, state.phase(), &self.screen);
        canvas.present();
    }

    fn draw_world<C: Canvas + ?Sized>(&self, canvas: &mut CameraCanvas<'_, C>, state: &LifeCycle) {
        let camera = canvas.camera();
        let screen_size = Vec2::new(self.screen.width as f32, self.screen.height as f32);

        draw_soil(
            canvas,
            &self.screen,
            &self.grass,
            camera.unapply(Vec2::ZERO),
            camera.unapply(screen_size),
        );

        let seed = state.seed_position();
        if state.phase().shows_buried_seed() {
            draw_seed(canvas, seed, 0.0, state.sprout_scale());
            if state.phase() == Phase::Seedling {
                draw_seedling_leaves(canvas, seed, state.sprout_scale());
            }
        }

        let growth = state.growth_scale();
        if growth > TREE_MIN_SCALE {
            let foot = seed - Vec2::new(0.0, TRUNK_OFFSET);
            let mut rng = SeededRng::new(self.leaf_seed);
            let elements = grow_tree(foot, growth, &self.params, &mut rng);
            let flowers = (state.flowers_shown() && growth > FLOWER_MIN_SCALE)
                .then(|| state.flower_scale());

            draw_tree(canvas, &elements, flowers);
            draw_tree_base(canvas, foot, growth);
        }

        for falling in state.seeds().iter().filter(|s| s.active) {
            draw_seed(canvas, falling.position, falling.angle, 1.0);
        }
        if let Some(spot) = state.landing() {
            draw_seed(canvas, spot, 0.0, 1.0);
        }
    }
}
