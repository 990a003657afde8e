//! Point type and vector arithmetic

use crate::math::polar;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point (or offset vector) in raster coordinates
///
/// Positive x is to the right and positive y is down, matching the
/// pixel grid the patterns are drawn onto.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (down is positive)
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The offset vector of the given length along the given angle
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        let (x, y) = polar::to_cartesian(radius, angle);
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Length of this point treated as a vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Z component of the cross product of `self` and `other`
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn test_vector_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(b * 2.0, Point::new(6.0, -2.0));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_sign_follows_orientation() {
        let right = Point::new(1.0, 0.0);
        let down = Point::new(0.0, 1.0);
        assert!(right.cross(down) > 0.0);
        assert!(down.cross(right) < 0.0);
    }
}
