//! Open and closed polylines
//!
//! A closed polyline owns an implicit edge from its last point back to
//! its first; an open one does not. The distinction decides whether a
//! query ray can slip between the two ends of a curve, which is exactly
//! the difference between ribbon outlines (closed) and the canvas
//! border (open).

use crate::geometry::Point;
use crate::geometry::segment::segments_cross;

/// An ordered sequence of points forming an open or closed curve
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    closed: bool,
}

impl Polyline {
    /// Create an open polyline (no edge between last and first point)
    pub const fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Create a closed polyline (implicit edge from last to first point)
    pub const fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// The points of the polyline in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the closing edge participates in queries
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Iterate over the edges, including the closing edge when closed
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let wrap = if self.closed && self.points.len() > 2 {
            self.points.last().zip(self.points.first()).map(|(a, b)| (*a, *b))
        } else {
            None
        };
        self.points
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some((*a, *b)),
                _ => None,
            })
            .chain(wrap)
    }

    /// Whether the segment `a..b` crosses any edge of this polyline
    pub fn crosses_segment(&self, a: Point, b: Point) -> bool {
        self.edges().any(|(e1, e2)| segments_cross(a, b, e1, e2))
    }

    /// Whether any edge of `other` crosses any edge of this polyline
    pub fn crosses_polyline(&self, other: &Self) -> bool {
        other.edges().any(|(a, b)| self.crosses_segment(a, b))
    }
}
