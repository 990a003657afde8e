//! Breadth-first radial subdivision generator
//!
//! A frontier of not-yet-expanded primitives is drained once per
//! iteration: every primitive is optionally drawn, then replaced by a
//! ring of smaller children at fixed angular offsets. Level-by-level
//! expansion without recursion means the frontier after iteration k
//! holds exactly `branching^k` times the initial count.

use crate::generator::Primitive;
use crate::geometry::Point;
use crate::io::configuration::{
    RADIAL_BRANCHING, RADIAL_CENTER_MULT, RADIAL_PALETTE, RADIAL_RADIUS_MULT,
};
use crate::render::{Canvas, Color};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;
use std::f64::consts::PI;

/// Parameters controlling radial subdivision
#[derive(Debug, Clone)]
pub struct RadialConfig {
    /// Children spawned per primitive (the branching factor)
    pub num_points: usize,
    /// Child radius as a fraction of the parent radius
    pub r_mult: f64,
    /// Child center offset as a fraction of the parent radius
    pub c_mult: f64,
    /// Angular drift added per iteration, in radians
    pub d_angle: f64,
    /// Bounded random jitter applied to child centers, as a fraction
    /// of the child radius; zero disables jitter
    pub rand_shift: f64,
    /// Child color cycle, indexed by child position
    pub palette: Vec<Color>,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            num_points: RADIAL_BRANCHING,
            r_mult: RADIAL_RADIUS_MULT,
            c_mult: RADIAL_CENTER_MULT,
            d_angle: 0.0,
            rand_shift: 0.0,
            palette: RADIAL_PALETTE.to_vec(),
        }
    }
}

/// Breadth-first subdivision of disc primitives
///
/// The generator never decides to stop on its own: the caller bounds
/// the iteration count, and the frontier grows geometrically with it.
pub struct RadialPattern {
    frontier: VecDeque<Primitive>,
    config: RadialConfig,
    n_iter: usize,
    rng: StdRng,
}

impl RadialPattern {
    /// Create a pattern with a single seed disc
    pub fn new(start: Point, start_radius: f64, color: Color, config: RadialConfig, seed: u64) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_front(Primitive::circle(start, start_radius, color));
        Self {
            frontier,
            config,
            n_iter: 1,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of primitives awaiting expansion
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Iterate over the primitives awaiting expansion, oldest last
    pub fn frontier(&self) -> impl Iterator<Item = &Primitive> {
        self.frontier.iter()
    }

    /// Expand the current frontier exactly once
    ///
    /// Every primitive is popped in order, drawn when a canvas is
    /// given, and replaced by `num_points` children at angles
    /// `(i*2 - 0.5) * pi / num_points` plus the accumulated drift.
    pub fn iterate(&mut self, mut canvas: Option<&mut Canvas>) {
        let level_size = self.frontier.len();
        let drift = self.n_iter as f64 * self.config.d_angle;
        for _ in 0..level_size {
            let Some(current) = self.frontier.pop_back() else {
                break;
            };
            self.spawn_children(&current, drift);
            if let Some(target) = canvas.as_deref_mut() {
                current.render(target);
            }
        }
        self.n_iter += 1;
    }

    fn spawn_children(&mut self, parent: &Primitive, drift: f64) {
        let num_points = self.config.num_points;
        for i in 0..num_points {
            let angle = ((i as f64).mul_add(2.0, -0.5)) * PI / num_points as f64 + drift;
            let offset = Point::from_polar(parent.radius() * self.config.c_mult, angle);
            let radius = parent.radius() * self.config.r_mult;
            let mut center = parent.center + offset;
            if self.config.rand_shift > 0.0 {
                let jitter = self.config.rand_shift * radius;
                center.x += (self.rng.random::<f64>() * 2.0 - 1.0) * jitter;
                center.y += (self.rng.random::<f64>() * 2.0 - 1.0) * jitter;
            }
            let color = self
                .config
                .palette
                .get(i % self.config.palette.len().max(1))
                .copied()
                .unwrap_or(parent.color);
            self.frontier
                .push_front(Primitive::circle(center, radius, color));
        }
    }
}
