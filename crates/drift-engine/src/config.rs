use serde::{Deserialize, Serialize};

use crate::core::particle::Tint;

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Configuration for the particle field, fixed at init time.
/// The hosting page may override individual fields via JSON;
/// anything left out keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles in the field (default: 80).
    pub particle_count: usize,
    /// Maximum drift speed per axis, in surface units per tick (default: 0.3).
    pub max_speed: f32,
    /// Smallest particle radius (default: 1.5).
    pub radius_min: f32,
    /// Largest particle radius (default: 3.5).
    pub radius_max: f32,
    /// Lowest particle fill opacity (default: 0.2).
    pub opacity_min: f32,
    /// Highest particle fill opacity (default: 0.8).
    pub opacity_max: f32,
    /// Distance below which two particles are linked (default: 140).
    pub link_distance: f32,
    /// Link opacity at zero distance; fades linearly to nothing at
    /// `link_distance` (default: 0.25).
    pub link_alpha: f32,
    /// Link stroke width (default: 0.5).
    pub link_width: f32,
    /// The two-color palette. The first entry doubles as the link
    /// stroke color.
    pub palette: [Color; 2],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 80,
            max_speed: 0.3,
            radius_min: 1.5,
            radius_max: 3.5,
            opacity_min: 0.2,
            opacity_max: 0.8,
            link_distance: 140.0,
            link_alpha: 0.25,
            link_width: 0.5,
            palette: [
                // Indigo #6366F1, violet #8B5CF6
                Color::rgb(0.388, 0.400, 0.945),
                Color::rgb(0.545, 0.361, 0.965),
            ],
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fill color for a particle tint.
    pub fn tint_color(&self, tint: Tint) -> Color {
        self.palette[tint as usize]
    }

    /// Stroke color shared by every link, regardless of particle tints.
    pub fn link_color(&self) -> Color {
        self.palette[0]
    }
}
