//! A single drifting particle.

use glam::Vec2;

use crate::core::rng::Rng;

/// The two palette colors a particle can carry.
/// The first one (`Indigo`) also strokes the proximity links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tint {
    Indigo = 0,
    Violet,
}

impl Tint {
    pub const ALL: [Tint; 2] = [Self::Indigo, Self::Violet];

    /// Unbiased coin flip between the two palette colors.
    pub fn random(rng: &mut Rng) -> Self {
        if rng.chance(0.5) {
            Self::Indigo
        } else {
            Self::Violet
        }
    }
}

/// A particle drifting across the surface at a constant velocity.
/// Only the position ever changes after creation.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub tint: Tint,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32, tint: Tint) -> Self {
        Particle {
            position,
            velocity,
            radius,
            opacity,
            tint,
        }
    }
}
