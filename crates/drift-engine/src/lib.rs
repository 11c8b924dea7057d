pub mod config;
pub mod core;
pub mod renderer;
pub mod runner;
pub mod systems;

// Re-export key types at crate root for convenience
pub use config::{Color, FieldConfig};
pub use core::field::Field;
pub use core::particle::{Particle, Tint};
pub use core::rng::Rng;
pub use renderer::instance::{CircleInstance, FrameBuffer, LinkInstance};
pub use renderer::surface::Surface;
pub use runner::{run, FieldRunner, FrameBudget, Scheduler};
pub use systems::render::{link_alpha, render_field};
