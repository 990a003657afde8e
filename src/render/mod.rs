//! Raster drawing surface consumed by the generators
//!
//! The generators only ever ask for a handful of operations: fill the
//! surface, draw a filled disc, fill a polygon, switch the compositing
//! operator. Everything else (PNG/GIF encoding) lives in `io`.

/// Raster canvas with disc and polygon fills
pub mod canvas;
/// RGBA color and compositing operators
pub mod color;

pub use canvas::{Canvas, CompositeOp};
pub use color::Color;
