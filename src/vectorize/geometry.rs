//! Contour geometry helpers
//!
//! Bounding boxes, enclosed area, and the pixel-to-unit-square coordinate
//! mapping used by the vectorization pipeline.

use imageproc::point::Point;

/// Combined bounding box over a set of 2D points
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// False until at least one point has been added
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite() && self.min_y.is_finite()
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Area enclosed by a closed contour, via the shoelace formula.
///
/// Degenerate contours (fewer than 3 points) have zero area.
pub fn contour_area(points: &[Point<u32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut sum = 0i64;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        sum += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }

    sum.abs() as f64 / 2.0
}

/// Map a pixel coordinate into the centered unit square.
///
/// The image's top-left maps to (-0.5, 0.5) and its bottom-right to
/// (0.5, -0.5): x is re-centered, y is re-centered and flipped so that
/// increasing y means "up". Results are rounded to 4 decimal places.
pub fn normalize_point(x: u32, y: u32, width: u32, height: u32) -> (f64, f64) {
    let nx = x as f64 / width as f64 - 0.5;
    let ny = 0.5 - y as f64 / height as f64;
    (round4(nx), round4(ny))
}

/// Round to 4 decimal places
pub fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}
