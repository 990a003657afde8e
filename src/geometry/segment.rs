//! Segment orientation and crossing predicates

use crate::geometry::Point;

/// Orientation of point `c` relative to the directed line `a -> b`
///
/// Positive means `c` lies clockwise of the line in raster coordinates,
/// negative counter-clockwise, zero collinear (within `f64` exactness).
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

/// Whether collinear point `p` lies within the bounding box of `a..b`
fn within_span(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Whether segment `a1..a2` crosses segment `b1..b2`
///
/// Touching counts as crossing: a shared endpoint or a collinear
/// overlap both return true. Collinear but disjoint segments do not.
pub fn segments_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_span(b1, b2, a1))
        || (d2 == 0.0 && within_span(b1, b2, a2))
        || (d3 == 0.0 && within_span(a1, a2, b1))
        || (d4 == 0.0 && within_span(a1, a2, b2))
}
