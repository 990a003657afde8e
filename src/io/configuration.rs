//! Generator constants and runtime configuration defaults

use crate::render::Color;
use std::f64::consts::TAU;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1024;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 1024;

/// Default subdivision count for the radial scene
pub const DEFAULT_RADIAL_ITERATIONS: usize = 11;
/// Default number of seed paths for the paths scene
pub const DEFAULT_PATH_COUNT: usize = 1;
/// Default frame count for the video scene
pub const DEFAULT_FRAME_COUNT: usize = 299;

// Radial generator tuning
/// Children spawned per primitive
pub const RADIAL_BRANCHING: usize = 3;
/// Child radius as a fraction of the parent radius
pub const RADIAL_RADIUS_MULT: f64 = 0.5;
/// Child center offset as a fraction of the parent radius
pub const RADIAL_CENTER_MULT: f64 = 0.5;
/// Seed disc radius as a fraction of canvas height
pub const RADIAL_SEED_RADIUS_RATIO: f64 = 0.4;
/// Smallest radius a disc is ever drawn at
pub const MIN_DRAWN_RADIUS: f64 = 0.5;

/// Child color cycle for radial subdivision
pub const RADIAL_PALETTE: [Color; 3] = [
    Color::opaque(1.0, 1.0, 0.0),
    Color::opaque(0.0, 1.0, 1.0),
    Color::opaque(1.0, 0.0, 1.0),
];

/// Per-frame angular drift for the video scene: one full revolution
/// every 300 frames
pub const VIDEO_DRIFT_PER_FRAME: f64 = TAU / 300.0;

// Path generator tuning
/// Momentum integration time step
pub const MOMENTUM_DT: f64 = 0.2;
/// Forward speed of a path, in canvas units per step
pub const PATH_SPEED: f64 = 2.0;
/// Per-step probability of spawning a branch
pub const BRANCH_PROBABILITY: f64 = 0.08;
/// Branch generation ceiling
pub const BRANCH_DEPTH_CAP: usize = 1024;
/// Distance from the centerline to the nearest possible spawn point
pub const BRANCH_SPAWN_MARGIN: f64 = 6.0;
/// Width of the random band beyond the spawn margin
pub const BRANCH_SPAWN_SPREAD: f64 = 10.0;

// Safety limit: the dead-end test is the intended termination
// mechanism, the cap only catches a heuristic that never fires
/// Hard ceiling on integration steps per path
pub const MAX_PATH_STEPS: usize = 10_000;

/// Dead-end test ray length as a multiple of path speed
pub const DEAD_END_LOOKAHEAD: f64 = 10.0;
/// Forward offset of the dead-end test ray's near end
pub const RAY_START_OFFSET: f64 = 0.1;

/// Centerlines shorter than this are rejected outright
pub const MIN_CENTERLINE_POINTS: usize = 23;
/// Ribbon half-width at the taper ends
pub const RIBBON_BASE_HALF_WIDTH: f64 = 1.0;
/// Additional half-width at the taper peak
pub const RIBBON_HALF_WIDTH_GAIN: f64 = 4.0;
/// Ribbon fill alpha per centerline point, capped at full opacity
pub const RIBBON_ALPHA_SCALE: f64 = 0.004;

/// Uniform spans for seeding the angle, velocity and acceleration terms
pub const MOMENTUM_SEED_SPANS: [f64; 3] = [1.0, 0.1, 0.01];
/// Constant jerk term for seeded momentum
pub const MOMENTUM_SEED_JERK: f64 = 0.001;

/// Base color for ribbon paths before length-scaled alpha is applied
pub const PATH_COLOR: Color = Color::opaque(1.0, 0.7, 0.0);

// Safety limit to prevent excessive memory allocation
/// Maximum primitives a radial frontier may reach
pub const MAX_FRONTIER_PRIMITIVES: usize = 10_000_000;

// Output settings
/// Delay between GIF animation frames (25 fps)
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
