//! Input/output operations: CLI, configuration, export and progress

/// Command-line interface and scene orchestration
pub mod cli;
/// Generator constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// PNG export for rendered canvases
pub mod image;
/// Progress display for long-running scene renders
pub mod progress;
/// Animated GIF export for frame sequences
pub mod video;
