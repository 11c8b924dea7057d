pub mod render;

pub use render::{link_alpha, render_field};
