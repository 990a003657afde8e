//! Raster canvas with disc and polygon fills
//!
//! Pixels are sampled at their centers: a shape covers a pixel when it
//! contains the point `(x + 0.5, y + 0.5)`. Polygon fills use even-odd
//! scanline coverage.

use crate::geometry::Point;
use crate::render::Color;
use image::{Rgba, RgbaImage};

/// Compositing operator applied when drawing onto the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOp {
    /// Standard source-over alpha blending
    #[default]
    Over,
    /// Per-channel difference against the destination
    Difference,
}

/// A raster drawing surface backed by an RGBA image buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    operator: CompositeOp,
}

impl Canvas {
    /// Create a transparent canvas of the given pixel dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            operator: CompositeOp::Over,
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Switch the compositing operator for subsequent draws
    pub const fn set_operator(&mut self, operator: CompositeOp) {
        self.operator = operator;
    }

    /// Replace every pixel with a solid color, ignoring the operator
    pub fn fill(&mut self, color: Color) {
        let pixel = color.to_rgba8();
        for dst in self.image.pixels_mut() {
            *dst = pixel;
        }
    }

    /// Read back a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Draw a filled disc centered at `center`
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let (x0, x1) = self.clamp_x_span(center.x - radius, center.x + radius);
        let (y0, y1) = self.clamp_y_span(center.y - radius, center.y + radius);
        let limit = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let sample = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let offset = sample - center;
                if offset.x.mul_add(offset.x, offset.y * offset.y) <= limit {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill a closed polygon given its outline points
    ///
    /// The outline is implicitly closed from the last point back to the
    /// first. Fewer than three points is a no-op.
    pub fn fill_polygon(&mut self, outline: &[Point], color: Color) {
        if outline.len() < 3 {
            return;
        }
        let min_y = outline.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = outline
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        let (y0, y1) = self.clamp_y_span(min_y, max_y);

        let mut crossings: Vec<f64> = Vec::new();
        for y in y0..=y1 {
            let scan = f64::from(y) + 0.5;
            crossings.clear();
            for (a, b) in Self::outline_edges(outline) {
                if (a.y <= scan && b.y > scan) || (b.y <= scan && a.y > scan) {
                    let t = (scan - a.y) / (b.y - a.y);
                    crossings.push(t.mul_add(b.x - a.x, a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                if let [enter, exit] = pair {
                    self.fill_scanline_run(y, *enter, *exit, color);
                }
            }
        }
    }

    /// Consume the canvas, yielding the backing image buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Borrow the backing image buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn outline_edges(outline: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
        let wrap = outline.last().zip(outline.first()).map(|(a, b)| (*a, *b));
        outline
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some((*a, *b)),
                _ => None,
            })
            .chain(wrap)
    }

    fn fill_scanline_run(&mut self, y: u32, enter: f64, exit: f64, color: Color) {
        // Pixels whose centers fall inside [enter, exit]
        let start = (enter - 0.5).ceil().max(0.0) as i64;
        let end = (exit - 0.5).floor().min(f64::from(self.width()) - 1.0) as i64;
        for x in start..=end {
            if x >= 0 {
                self.blend_pixel(x as u32, y, color);
            }
        }
    }

    fn clamp_x_span(&self, min: f64, max: f64) -> (u32, u32) {
        let hi = self.width().saturating_sub(1);
        let x0 = min.floor().clamp(0.0, f64::from(hi)) as u32;
        let x1 = max.ceil().clamp(0.0, f64::from(hi)) as u32;
        (x0, x1)
    }

    fn clamp_y_span(&self, min: f64, max: f64) -> (u32, u32) {
        let hi = self.height().saturating_sub(1);
        let y0 = min.floor().clamp(0.0, f64::from(hi)) as u32;
        let y1 = max.ceil().clamp(0.0, f64::from(hi)) as u32;
        (y0, y1)
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let dst = Color::from_rgba8(*self.image.get_pixel(x, y));
        let out = match self.operator {
            CompositeOp::Over => dst.over(color),
            CompositeOp::Difference => dst.difference(color),
        };
        self.image.put_pixel(x, y, out.to_rgba8());
    }
}
