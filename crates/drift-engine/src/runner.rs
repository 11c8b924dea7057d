//! Frame loop driver: one tick = advance, then render.
//!
//! The engine never owns a clock. Whoever hosts it hands out ticks, one
//! per display refresh: in the browser that is `requestAnimationFrame`
//! calling the bridge's tick export, headless it is a `Scheduler`
//! driving `run`. There is no catch-up and no frame skipping; a late
//! tick is simply a late tick.

use crate::config::FieldConfig;
use crate::core::field::Field;
use crate::core::rng::Rng;
use crate::renderer::surface::Surface;
use crate::systems::render::render_field;

/// Hands ticks to the loop.
pub trait Scheduler {
    /// Request one more tick. Returns false once the host is done.
    fn request_tick(&mut self) -> bool;
}

/// A scheduler that grants a fixed number of ticks, for headless runs.
pub struct FrameBudget {
    remaining: u32,
}

impl FrameBudget {
    pub fn new(frames: u32) -> Self {
        Self { remaining: frames }
    }
}

impl Scheduler for FrameBudget {
    fn request_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Owns the field, its configuration, and the drawing surface, and
/// advances them together one tick at a time. Nothing else reads or
/// writes the field while a tick is in flight.
pub struct FieldRunner<S: Surface> {
    config: FieldConfig,
    field: Field,
    surface: S,
    rng: Rng,
}

impl<S: Surface> FieldRunner<S> {
    /// Build a runner with a freshly sampled field.
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64, surface: S) -> Self {
        let mut rng = Rng::new(seed);
        let field = Field::new(&config, width, height, &mut rng);
        Self {
            config,
            field,
            surface,
            rng,
        }
    }

    /// One frame: advance the simulation, then redraw the whole surface.
    pub fn tick(&mut self) {
        self.field.advance();
        render_field(&self.field, &self.config, &mut self.surface);
    }

    /// The viewport changed: swap the recorded dimensions, nothing else.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("field resized to {}x{}", width, height);
        self.field.on_resize(width, height);
    }

    /// Discard the field and sample a fresh one at the current dimensions.
    /// The only way particles are ever recreated.
    pub fn reset(&mut self) {
        log::debug!("field reset");
        self.field = Field::new(
            &self.config,
            self.field.width(),
            self.field.height(),
            &mut self.rng,
        );
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Drive `runner` until the scheduler stops granting ticks.
pub fn run<S: Surface>(runner: &mut FieldRunner<S>, scheduler: &mut impl Scheduler) {
    while scheduler.request_tick() {
        runner.tick();
    }
}
