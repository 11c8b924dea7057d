use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::config::Color;
use crate::renderer::surface::Surface;

/// Per-circle draw data read by the JS renderer from wasm memory.
/// Must match the JS protocol: 7 floats = 28 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center X in surface units.
    pub x: f32,
    /// Center Y in surface units.
    pub y: f32,
    /// Circle radius.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Fill opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 7;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-link draw data: one line segment of the proximity graph.
/// Must match the JS protocol: 5 floats = 20 bytes stride.
/// Stroke width and color are uniform across every link of a frame;
/// the host reads them once from the style accessors.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LinkInstance {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Stroke opacity, already distance-faded.
    pub alpha: f32,
}

impl LinkInstance {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Frame buffer containing the circle and link instances of one frame,
/// exposed to the host as flat f32 arrays.
pub struct FrameBuffer {
    circles: Vec<CircleInstance>,
    links: Vec<LinkInstance>,
    max_circles: usize,
    max_links: usize,
    width: f32,
    height: f32,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::for_field(0)
    }

    /// Preallocate for a field of `particle_count` particles: every
    /// particle is one circle, and every unordered pair is at most one
    /// link, so steady-state frames never reallocate.
    pub fn for_field(particle_count: usize) -> Self {
        let max_links = particle_count * particle_count.saturating_sub(1) / 2;
        Self {
            circles: Vec::with_capacity(particle_count),
            links: Vec::with_capacity(max_links),
            max_circles: particle_count,
            max_links,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    pub fn links(&self) -> &[LinkInstance] {
        &self.links
    }

    pub fn circle_count(&self) -> u32 {
        self.circles.len() as u32
    }

    pub fn link_count(&self) -> u32 {
        self.links.len() as u32
    }

    /// Configured circle capacity, for the host's buffer views.
    pub fn max_circles(&self) -> u32 {
        self.max_circles as u32
    }

    /// Configured link capacity, for the host's buffer views.
    pub fn max_links(&self) -> u32 {
        self.max_links as u32
    }

    /// Extent of the most recent `frame_clear`.
    pub fn extent(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Raw pointer to circle data for wasm-memory reads.
    pub fn circles_ptr(&self) -> *const f32 {
        self.circles.as_ptr() as *const f32
    }

    /// Raw pointer to link data for wasm-memory reads.
    pub fn links_ptr(&self) -> *const f32 {
        self.links.as_ptr() as *const f32
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for FrameBuffer {
    fn frame_clear(&mut self, width: f32, height: f32) {
        self.circles.clear();
        self.links.clear();
        self.width = width;
        self.height = height;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.circles.push(CircleInstance {
            x: center.x,
            y: center.y,
            radius,
            r: color.r,
            g: color.g,
            b: color.b,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, _color: Color, alpha: f32) {
        // Width and color are per-frame uniforms on the host side.
        self.links.push(LinkInstance {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            alpha,
        });
    }
}
