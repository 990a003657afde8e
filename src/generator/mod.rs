//! The recursive generators and their supporting state
//!
//! Two independent families share this module: breadth-first radial
//! subdivision of disc primitives, and forward-integrated ribbon paths
//! that branch, avoid previously drawn ribbons, and terminate at dead
//! ends.

/// Cascaded angular-momentum integrator
pub mod momentum;
/// Branching ribbon-path generator
pub mod path;
/// Drawable primitives for the radial generator
pub mod primitive;
/// Breadth-first radial subdivision generator
pub mod radial;

pub use momentum::Momentum;
pub use path::{PathConfig, RibbonPath};
pub use primitive::{Primitive, Shape};
pub use radial::{RadialConfig, RadialPattern};
