//! Render pass: the proximity graph first, then the particles on top.

use crate::config::FieldConfig;
use crate::core::field::Field;
use crate::renderer::surface::Surface;

/// Stroke opacity for a pair at `distance`: fades linearly from
/// `config.link_alpha` at zero distance to nothing at `link_distance`.
/// `None` at or beyond the threshold.
pub fn link_alpha(distance: f32, config: &FieldConfig) -> Option<f32> {
    if distance < config.link_distance {
        Some((1.0 - distance / config.link_distance) * config.link_alpha)
    } else {
        None
    }
}

/// Draw one frame of the field onto `surface`.
///
/// Clears the full surface, strokes every in-range unordered pair exactly
/// once (`i < j`, no spatial index, distances recomputed from scratch),
/// then fills every particle with its own radius, tint, and opacity.
pub fn render_field(field: &Field, config: &FieldConfig, surface: &mut impl Surface) {
    surface.frame_clear(field.width(), field.height());

    let particles = field.particles();
    let link_color = config.link_color();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let distance = particles[i].position.distance(particles[j].position);
            if let Some(alpha) = link_alpha(distance, config) {
                surface.stroke_line(
                    particles[i].position,
                    particles[j].position,
                    config.link_width,
                    link_color,
                    alpha,
                );
            }
        }
    }

    for p in particles {
        surface.fill_circle(p.position, p.radius, config.tint_color(p.tint), p.opacity);
    }
}
