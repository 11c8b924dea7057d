//! Surface trait for render backends.
//!
//! All real rasterization happens in the hosting page (Canvas2D); the
//! engine draws through this trait into a flat buffer the page reads back.
//! Headless runs and tests drive the same pass against other implementors.

use glam::Vec2;

use crate::config::Color;

/// A drawing surface for one frame of the particle field.
///
/// The render pass calls `frame_clear` exactly once per frame, then emits
/// primitives in paint order: link strokes first, particle fills on top.
pub trait Surface {
    /// Reset the surface for a new frame covering `width x height`.
    /// Nothing carries over from the previous frame (no trails).
    fn frame_clear(&mut self, width: f32, height: f32);

    /// Fill a circle. `alpha` rides in the fill color, not on the surface.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);

    /// Stroke a straight segment of the given width.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, alpha: f32);
}
