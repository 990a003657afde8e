//! Mathematical utilities for the generators

/// Polar to Cartesian coordinate conversion
pub mod polar;
