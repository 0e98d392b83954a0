//! Rendering module
//!
//! The scene is described through the [`Canvas`] draw-primitive trait,
//! rasterized in software and presented in the terminal with half-blocks.

pub mod canvas;
pub mod raster;
pub mod scene;
pub mod terminal;

pub use canvas::{Canvas, Rgb, TextAnchor, TextLabel, TextSize};
pub use raster::Framebuffer;
pub use scene::draw_frame;
pub use terminal::{FramebufferView, cell_to_logical, fit_viewport, framebuffer_size};
