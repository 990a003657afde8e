//! Obstacle registry consulted by growing paths
//!
//! The registry starts with the canvas border (an open rectangle
//! outline) and grows by one closed ribbon outline per accepted path.
//! It is append-only for the duration of a run and is passed explicitly
//! wherever it is needed; there is no global state.

use crate::geometry::{Point, Polyline};

/// Append-only collection of obstacle polylines plus the canvas bounds
#[derive(Debug, Clone)]
pub struct ObstacleSet {
    width: f64,
    height: f64,
    obstacles: Vec<Polyline>,
}

impl ObstacleSet {
    /// Create a registry for a canvas, seeded with its border outline
    ///
    /// The border is registered as an open polyline: its four edges
    /// block growth, but it carries no additional closing edge.
    pub fn with_border(width: f64, height: f64) -> Self {
        let border = Polyline::open(vec![
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
            Point::new(0.0, 0.0),
        ]);
        Self {
            width,
            height,
            obstacles: vec![border],
        }
    }

    /// Canvas width in canvas units
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in canvas units
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Whether a point lies within `[0, width] x [0, height]`
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Append a finalized outline to the registry
    pub fn register(&mut self, outline: Polyline) {
        self.obstacles.push(outline);
    }

    /// Number of registered obstacles, border included
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the registry holds no obstacles at all
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Iterate over all registered obstacles, border first
    pub fn iter(&self) -> impl Iterator<Item = &Polyline> {
        self.obstacles.iter()
    }

    /// Whether the segment `a..b` crosses any registered obstacle
    pub fn blocks_segment(&self, a: Point, b: Point) -> bool {
        self.obstacles.iter().any(|o| o.crosses_segment(a, b))
    }

    /// Whether any edge of `outline` crosses any registered obstacle
    pub fn blocks_polyline(&self, outline: &Polyline) -> bool {
        self.obstacles.iter().any(|o| o.crosses_polyline(outline))
    }
}
