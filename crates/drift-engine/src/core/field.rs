//! The particle field: a fixed-size collection of particles plus the
//! current surface dimensions.

use glam::Vec2;

use crate::config::FieldConfig;
use crate::core::particle::{Particle, Tint};
use crate::core::rng::Rng;

/// Fixed-size particle collection. Particles are created once, drift
/// forever, and wrap at the surface edges; the collection never grows
/// or shrinks.
pub struct Field {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl Field {
    /// Sample a fresh field of `config.particle_count` particles over a
    /// `width x height` surface.
    ///
    /// Each particle draws, in a fixed order, its position, per-axis
    /// velocity, radius, opacity, and tint from `rng`, so a seeded `Rng`
    /// reproduces the exact same field.
    pub fn new(config: &FieldConfig, width: f32, height: f32, rng: &mut Rng) -> Self {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            let position = Vec2::new(rng.range(0.0, width), rng.range(0.0, height));
            let velocity = Vec2::new(
                rng.range(-config.max_speed, config.max_speed),
                rng.range(-config.max_speed, config.max_speed),
            );
            let radius = rng.range(config.radius_min, config.radius_max);
            let opacity = rng.range(config.opacity_min, config.opacity_max);
            let tint = Tint::random(rng);
            particles.push(Particle::new(position, velocity, radius, opacity, tint));
        }
        Self {
            particles,
            width,
            height,
        }
    }

    /// Build a field from pre-made particles (custom layouts).
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    /// One Euler step: every particle moves by its velocity, then wraps.
    ///
    /// Wraparound runs after both axes have moved and is applied per axis,
    /// so a particle can wrap horizontally and vertically in the same step.
    /// Overshoot is preserved: a particle leaving at `width + 0.25`
    /// re-enters at `0.25`, never at the edge itself.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.position.x = p.position.x.rem_euclid(self.width);
            p.position.y = p.position.y.rem_euclid(self.height);
        }
    }

    /// Record new surface dimensions.
    ///
    /// Particles are left exactly where they are; anything now out of
    /// bounds re-enters on the next `advance`.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the field. Constant for its lifetime.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(count: usize) -> FieldConfig {
        FieldConfig {
            particle_count: count,
            ..FieldConfig::default()
        }
    }

    fn drifter(position: Vec2, velocity: Vec2) -> Particle {
        Particle::new(position, velocity, 2.0, 0.5, Tint::Indigo)
    }

    #[test]
    fn field_has_requested_count() {
        let mut rng = Rng::new(42);
        let field = Field::new(&test_config(80), 800.0, 600.0, &mut rng);
        assert_eq!(field.len(), 80);
    }

    #[test]
    fn advance_keeps_count_constant() {
        let mut rng = Rng::new(42);
        let mut field = Field::new(&test_config(30), 800.0, 600.0, &mut rng);
        for _ in 0..100 {
            field.advance();
        }
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn advance_keeps_positions_in_bounds() {
        let mut rng = Rng::new(7);
        let mut field = Field::new(&test_config(50), 320.0, 240.0, &mut rng);
        for _ in 0..2000 {
            field.advance();
            for p in field.particles() {
                assert!(p.position.x >= 0.0 && p.position.x < 320.0, "x: {}", p.position.x);
                assert!(p.position.y >= 0.0 && p.position.y < 240.0, "y: {}", p.position.y);
            }
        }
    }

    #[test]
    fn advance_preserves_overshoot() {
        let p = drifter(Vec2::new(99.95, 50.0), Vec2::new(0.3, 0.0));
        let mut field = Field::from_particles(vec![p], 100.0, 100.0);
        field.advance();
        let x = field.particles()[0].position.x;
        assert!((x - 0.25).abs() < 1e-3, "wrapped to {}, expected 0.25", x);
    }

    #[test]
    fn advance_wraps_below_zero() {
        let p = drifter(Vec2::new(0.1, 50.0), Vec2::new(-0.3, 0.0));
        let mut field = Field::from_particles(vec![p], 100.0, 100.0);
        field.advance();
        let x = field.particles()[0].position.x;
        assert!((x - 99.8).abs() < 1e-3, "wrapped to {}, expected 99.8", x);
    }

    #[test]
    fn advance_can_wrap_both_axes_in_one_step() {
        let p = drifter(Vec2::new(99.9, 0.1), Vec2::new(0.3, -0.3));
        let mut field = Field::from_particles(vec![p], 100.0, 100.0);
        field.advance();
        let pos = field.particles()[0].position;
        assert!(pos.x < 1.0, "x should wrap forward, got {}", pos.x);
        assert!(pos.y > 99.0, "y should wrap backward, got {}", pos.y);
    }

    #[test]
    fn advance_never_changes_velocity() {
        let mut rng = Rng::new(42);
        let mut field = Field::new(&test_config(10), 800.0, 600.0, &mut rng);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.velocity).collect();
        for _ in 0..500 {
            field.advance();
        }
        let after: Vec<Vec2> = field.particles().iter().map(|p| p.velocity).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn resize_keeps_particles_in_place() {
        let mut rng = Rng::new(42);
        let mut field = Field::new(&test_config(20), 800.0, 600.0, &mut rng);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
        field.on_resize(1920.0, 1080.0);
        let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
        assert_eq!(field.width(), 1920.0);
        assert_eq!(field.height(), 1080.0);
    }

    #[test]
    fn resize_to_same_dimensions_is_a_noop() {
        let mut rng = Rng::new(42);
        let mut field = Field::new(&test_config(20), 800.0, 600.0, &mut rng);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
        field.on_resize(800.0, 600.0);
        let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
        assert_eq!(field.width(), 800.0);
        assert_eq!(field.height(), 600.0);
    }

    #[test]
    fn shrinking_resize_rebounds_on_next_advance() {
        let p = drifter(Vec2::new(750.0, 50.0), Vec2::new(0.1, 0.0));
        let mut field = Field::from_particles(vec![p], 800.0, 100.0);
        field.on_resize(200.0, 100.0);
        // Stranded outside the new bounds until the next step
        assert!(field.particles()[0].position.x > 200.0);
        field.advance();
        let x = field.particles()[0].position.x;
        assert!(x >= 0.0 && x < 200.0, "still out of bounds: {}", x);
    }

    #[test]
    fn seeded_field_is_reproducible() {
        let config = test_config(3);
        let mut rng1 = Rng::new(1234);
        let mut rng2 = Rng::new(1234);
        let a = Field::new(&config, 800.0, 600.0, &mut rng1);
        let b = Field::new(&config, 800.0, 600.0, &mut rng2);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.radius, pb.radius);
            assert_eq!(pa.opacity, pb.opacity);
            assert_eq!(pa.tint, pb.tint);
        }
    }

    #[test]
    fn sampled_attributes_are_within_ranges() {
        let config = test_config(200);
        let mut rng = Rng::new(5);
        let field = Field::new(&config, 800.0, 600.0, &mut rng);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert!(p.velocity.x.abs() <= config.max_speed);
            assert!(p.velocity.y.abs() <= config.max_speed);
            assert!(p.radius >= config.radius_min && p.radius < config.radius_max);
            assert!(p.opacity >= config.opacity_min && p.opacity < config.opacity_max);
        }
    }
}
