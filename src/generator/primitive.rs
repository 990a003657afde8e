//! Drawable primitives for the radial generator

use crate::geometry::Point;
use crate::io::configuration::MIN_DRAWN_RADIUS;
use crate::render::{Canvas, Color};

/// Shape data for a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A filled disc of the given radius
    Circle {
        /// Disc radius in canvas units
        radius: f64,
    },
}

/// A positioned, sized, colored primitive
///
/// Immutable once created; rendering consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    /// Center position on the canvas
    pub center: Point,
    /// Shape and its dimensions
    pub shape: Shape,
    /// Fill color
    pub color: Color,
}

impl Primitive {
    /// Create a disc primitive
    pub const fn circle(center: Point, radius: f64, color: Color) -> Self {
        Self {
            center,
            shape: Shape::Circle { radius },
            color,
        }
    }

    /// The primitive's characteristic radius
    pub const fn radius(&self) -> f64 {
        match self.shape {
            Shape::Circle { radius } => radius,
        }
    }

    /// Render the primitive onto the canvas, consuming it
    ///
    /// Discs are floored at a minimum drawn radius so deep subdivision
    /// levels stay visible.
    pub fn render(self, canvas: &mut Canvas) {
        match self.shape {
            Shape::Circle { radius } => {
                canvas.fill_circle(self.center, radius.max(MIN_DRAWN_RADIUS), self.color);
            }
        }
    }
}
