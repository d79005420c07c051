//! Per-frame driver: poll input, advance the life cycle, draw

use log::info;

use crate::animation::LifeCycle;
use crate::data::LifeCycleConfig;
use crate::interaction::{Command, KeyQueue};
use crate::render::{Canvas, FrameRenderer};

/// The animation bound to a drawing surface
pub struct Animation<C: Canvas> {
    life_cycle: LifeCycle,
    renderer: FrameRenderer,
    canvas: C,
    running: bool,
    frames: u64,
}

impl<C: Canvas> Animation<C> {
    pub fn new(config: LifeCycleConfig, canvas: C) -> Self {
        let renderer = FrameRenderer::new(&config);
        Self {
            life_cycle: LifeCycle::new(config),
            renderer,
            canvas,
            running: true,
            frames: 0,
        }
    }

    /// Apply this frame's key commands, then update and render.
    /// Returns false once the animation has been asked to exit.
    pub fn step(&mut self, commands: &[Command]) -> bool {
        if !self.running {
            return false;
        }

        for command in commands {
            match command {
                Command::Exit => {
                    info!("exit requested after {} frames", self.frames);
                    self.running = false;
                    return false;
                }
                Command::Restart => self.life_cycle.restart(),
            }
        }

        self.life_cycle.update();
        self.renderer.render(&mut self.canvas, &self.life_cycle);
        self.frames += 1;
        true
    }

    /// Step with whatever keys were queued since the last frame. On exit the
    /// queue is closed so further presses reach the page untouched.
    pub fn step_keys(&mut self, keys: &KeyQueue) -> bool {
        let running = self.step(&keys.poll());
        if !running {
            keys.close();
        }
        running
    }

    pub fn restart(&mut self) {
        self.life_cycle.restart();
    }

    pub fn life_cycle(&self) -> &LifeCycle {
        &self.life_cycle
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}
