//! Branching ribbon-path generator
//!
//! A path integrates its centerline forward step by step under a
//! cascaded angular-momentum vector, occasionally spawning a branch
//! with perturbed momentum. Growth stops when a short forward test ray
//! would cross a registered obstacle or the path's own history (a dead
//! end). Once integration ends the centerline is widened into a ribbon
//! (left and right offset curves with a tapered profile); ribbons that
//! are too short or would overlap existing ribbons are silently
//! dropped. Accepted ribbons are drawn and registered as obstacles for
//! every path that follows.

use crate::generator::Momentum;
use crate::geometry::segment::segments_cross;
use crate::geometry::{ObstacleSet, Point, Polyline};
use crate::io::configuration::{
    BRANCH_DEPTH_CAP, BRANCH_PROBABILITY, BRANCH_SPAWN_MARGIN, BRANCH_SPAWN_SPREAD,
    DEAD_END_LOOKAHEAD, MAX_PATH_STEPS, MIN_CENTERLINE_POINTS, MOMENTUM_DT, RAY_START_OFFSET,
    RIBBON_ALPHA_SCALE, RIBBON_BASE_HALF_WIDTH, RIBBON_HALF_WIDTH_GAIN,
};
use crate::render::{Canvas, Color};
use rand::{Rng, rngs::StdRng};
use std::f64::consts::{FRAC_PI_2, PI};

/// Parameters controlling path integration and branching
#[derive(Debug, Clone, Copy)]
pub struct PathConfig {
    /// Per-step probability of spawning a branch
    pub branch_probability: f64,
    /// Branch generation ceiling
    pub max_depth: usize,
    /// Hard ceiling on integration steps per path
    pub max_steps: usize,
    /// Centerlines shorter than this are rejected outright
    pub min_centerline_points: usize,
    /// Momentum integration time step
    pub dt: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            branch_probability: BRANCH_PROBABILITY,
            max_depth: BRANCH_DEPTH_CAP,
            max_steps: MAX_PATH_STEPS,
            min_centerline_points: MIN_CENTERLINE_POINTS,
            dt: MOMENTUM_DT,
        }
    }
}

/// A directed centerline with a ribbon boundary and owned branches
pub struct RibbonPath {
    position: Point,
    speed: f64,
    momentum: Momentum,
    color: Color,
    depth: usize,
    config: PathConfig,
    centerline: Vec<Point>,
    headings: Vec<f64>,
    left: Vec<Point>,
    right: Vec<Point>,
    children: Vec<RibbonPath>,
}

impl RibbonPath {
    /// Create a seed path at the given start point
    pub fn new(
        start: Point,
        momentum: Momentum,
        speed: f64,
        color: Color,
        config: PathConfig,
    ) -> Self {
        Self::with_depth(start, momentum, speed, color, config, 0)
    }

    fn with_depth(
        start: Point,
        momentum: Momentum,
        speed: f64,
        color: Color,
        config: PathConfig,
        depth: usize,
    ) -> Self {
        Self {
            position: start,
            speed,
            momentum,
            color,
            depth,
            config,
            centerline: Vec::new(),
            headings: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The recorded centerline points
    pub fn centerline(&self) -> &[Point] {
        &self.centerline
    }

    /// The recorded heading per centerline point
    pub fn headings(&self) -> &[f64] {
        &self.headings
    }

    /// Left offset curve, present only after ribbon construction
    pub fn left_side(&self) -> &[Point] {
        &self.left
    }

    /// Right offset curve, present only after ribbon construction
    pub fn right_side(&self) -> &[Point] {
        &self.right
    }

    /// Branches spawned during integration, in spawn order
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Branch generation number
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Integrate the centerline forward until a dead end
    ///
    /// Each step records the current point and heading, advances the
    /// momentum, probes a forward test ray against the obstacle set and
    /// the path's own history, maybe spawns a branch, and finally moves
    /// the position one speed-length along the heading. The step cap is
    /// a safety net; the dead-end probe is the intended stop.
    pub fn generate(&mut self, obstacles: &ObstacleSet, rng: &mut StdRng) {
        for _ in 0..self.config.max_steps {
            self.centerline.push(self.position);
            self.headings.push(self.momentum.heading());

            self.momentum.advance(self.config.dt);
            let heading = self.momentum.heading();

            if self.probe_dead_end(heading, obstacles) {
                break;
            }
            self.maybe_spawn_branch(heading, obstacles, rng);
            self.position += Point::from_polar(self.speed, heading);
        }
    }

    /// Build the left and right offset curves around the centerline
    ///
    /// The half-width tapers thin-thick-thin along the path. If the
    /// resulting outline would cross any registered obstacle, both
    /// sides are discarded and the path is left with an empty ribbon.
    pub fn build_ribbon(&mut self, obstacles: &ObstacleSet) {
        let total = self.centerline.len();
        if total == 0 {
            return;
        }
        for (i, (point, heading)) in self.centerline.iter().zip(&self.headings).enumerate() {
            let profile = (PI * i as f64 / total as f64).sin().powi(3);
            let magnitude = RIBBON_HALF_WIDTH_GAIN.mul_add(profile, RIBBON_BASE_HALF_WIDTH);
            self.left
                .push(*point + Point::from_polar(magnitude, heading + FRAC_PI_2));
            self.right
                .push(*point + Point::from_polar(magnitude, heading - FRAC_PI_2));
        }
        if obstacles.blocks_polyline(&Polyline::closed(self.outline())) {
            self.left.clear();
            self.right.clear();
        }
    }

    /// The ribbon outline: left curve followed by the reversed right
    pub fn outline(&self) -> Vec<Point> {
        self.left
            .iter()
            .chain(self.right.iter().rev())
            .copied()
            .collect()
    }

    /// Generate, render and register this path, then its branches
    ///
    /// Rejected ribbons (too short, or overlapping) draw nothing and
    /// register nothing, but retained branches still render
    /// independently, in spawn order.
    pub fn draw(mut self, canvas: &mut Canvas, obstacles: &mut ObstacleSet, rng: &mut StdRng) {
        self.generate(obstacles, rng);
        self.build_ribbon(obstacles);

        let total = self.centerline.len();
        if total >= self.config.min_centerline_points && !self.left.is_empty() {
            let outline = self.outline();
            let alpha = (total as f64 * RIBBON_ALPHA_SCALE).min(1.0);
            canvas.fill_polygon(&outline, self.color.with_alpha(alpha));
            obstacles.register(Polyline::closed(outline));
        }

        for child in self.children {
            child.draw(canvas, obstacles, rng);
        }
    }

    // A dead end: the forward test ray crosses an obstacle or the
    // centerline recorded so far
    fn probe_dead_end(&self, heading: f64, obstacles: &ObstacleSet) -> bool {
        let near = self.position + Point::from_polar(RAY_START_OFFSET, heading);
        let far = self.position + Point::from_polar(self.speed * DEAD_END_LOOKAHEAD, heading);
        obstacles.blocks_segment(near, far) || self.crosses_own_history(near, far)
    }

    fn crosses_own_history(&self, near: Point, far: Point) -> bool {
        self.centerline.windows(2).any(|pair| match pair {
            [a, b] => segments_cross(near, far, *a, *b),
            _ => false,
        })
    }

    fn maybe_spawn_branch(&mut self, heading: f64, obstacles: &ObstacleSet, rng: &mut StdRng) {
        if self.depth >= self.config.max_depth
            || rng.random::<f64>() >= self.config.branch_probability
        {
            return;
        }
        let branched = self.momentum.randomly_mirrored(rng);
        let distance = rng.random::<f64>().mul_add(BRANCH_SPAWN_SPREAD, BRANCH_SPAWN_MARGIN);
        // Spawn on the outside of the turn so the branch clears the
        // parent's upcoming curve
        let side = if self.momentum.turn_rate() > 0.0 {
            -FRAC_PI_2
        } else {
            FRAC_PI_2
        };
        let candidate = self.position + Point::from_polar(distance, heading + side);
        if obstacles.contains(candidate) {
            self.children.push(Self::with_depth(
                candidate,
                branched,
                self.speed,
                self.color,
                self.config,
                self.depth + 1,
            ));
        }
    }
}
