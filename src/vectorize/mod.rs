//! Image vectorization module
//!
//! Converts a raster image (PNG, JPEG, GIF) into a flat list of simplified
//! 2D polylines tracing the image's edges, serialized as a compact JSON
//! array suitable for embedding in a web scene.
//!
//! The conversion process:
//! 1. Decode the image and convert to grayscale
//! 2. Gaussian-blur to suppress high-frequency noise
//! 3. Canny edge detection into a binary edge map
//! 4. Extract contours from the edge map (flat list, no hierarchy)
//! 5. Drop small-area contours, simplify the rest with Douglas-Peucker
//! 6. Normalize points into a centered, y-up unit square
//! 7. Uniformly scale everything so the longest bounding-box dimension
//!    matches the configured output extent

mod geometry;

use image::{GrayImage, ImageReader};
use imageproc::contours::find_contours;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use serde::Serialize;
use std::io::Cursor;

pub use geometry::{Bounds, contour_area, normalize_point, round4};

/// A 2D point in normalized output coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered run of at least two points
pub type Polyline = Vec<PathPoint>;

/// Options for image vectorization
#[derive(Debug, Clone)]
pub struct VectorizeOptions {
    /// Extent of the longest output dimension; coordinates end up roughly
    /// in [-scale/2, scale/2] (default: 4.0)
    pub output_scale_factor: f64,
    /// Gaussian blur kernel size, width x height (default: 5x5)
    pub blur_kernel: (u32, u32),
    /// Lower threshold for the Canny edge detector (default: 50)
    pub canny_low: f32,
    /// Upper threshold for the Canny edge detector (default: 150)
    pub canny_high: f32,
    /// Douglas-Peucker tolerance as a fraction of each contour's
    /// perimeter; smaller keeps more detail (default: 0.002)
    pub epsilon_factor: f64,
    /// Minimum enclosed area in pixels for a contour to be kept
    /// (default: 10)
    pub min_contour_area: f64,
}

impl Default for VectorizeOptions {
    fn default() -> Self {
        Self {
            output_scale_factor: 4.0,
            blur_kernel: (5, 5),
            canny_low: 50.0,
            canny_high: 150.0,
            epsilon_factor: 0.002,
            min_contour_area: 10.0,
        }
    }
}

/// Vectorize an image from encoded bytes
pub fn vectorize_image(
    image_bytes: &[u8],
    options: &VectorizeOptions,
) -> Result<Vec<Polyline>, String> {
    let img = ImageReader::new(Cursor::new(image_bytes))
        .with_guessed_format()
        .map_err(|e| format!("Failed to guess image format: {}", e))?
        .decode()
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    Ok(vectorize_gray(&img.to_luma8(), options))
}

/// Vectorize an image file
///
/// Decode failure is an `Err`; an image that simply yields no contours is
/// `Ok` with an empty list.
pub fn vectorize_image_file(
    path: &str,
    options: &VectorizeOptions,
) -> Result<Vec<Polyline>, String> {
    let img = ImageReader::open(path)
        .map_err(|e| format!("Failed to open image file: {}", e))?
        .decode()
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    // Palette-indexed inputs are expanded by the decoder before the
    // grayscale conversion.
    Ok(vectorize_gray(&img.to_luma8(), options))
}

/// Run the edge/contour pipeline on a grayscale image
pub fn vectorize_gray(gray: &GrayImage, options: &VectorizeOptions) -> Vec<Polyline> {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let blurred = gaussian_blur_f32(gray, gaussian_sigma(options.blur_kernel));
    let edges = canny(&blurred, options.canny_low, options.canny_high);

    let mut polylines: Vec<Polyline> = Vec::new();

    // Flat contour list; parent/hole information is deliberately ignored.
    for contour in find_contours::<u32>(&edges) {
        let points = contour.points;

        if contour_area(&points) < options.min_contour_area {
            continue; // noise
        }

        let epsilon = options.epsilon_factor * arc_length(&points, true);
        let simplified = approximate_polygon_dp(&points, epsilon, true);

        let polyline: Polyline = simplified
            .iter()
            .map(|p| {
                let (x, y) = normalize_point(p.x, p.y, width, height);
                PathPoint { x, y }
            })
            .collect();

        // A single surviving point cannot be drawn as a line.
        if polyline.len() > 1 {
            polylines.push(polyline);
        }
    }

    scale_to_extent(&mut polylines, options.output_scale_factor);
    polylines
}

/// Scale every point by one shared factor so the larger dimension of the
/// combined bounding box matches `target`. A degenerate box (single point,
/// zero extent) is left unscaled.
fn scale_to_extent(paths: &mut [Polyline], target: f64) {
    let mut bounds = Bounds::new();
    for p in paths.iter().flatten() {
        bounds.update(p.x, p.y);
    }
    if !bounds.is_valid() {
        return;
    }

    let span = bounds.width().max(bounds.height());
    let scale = if span == 0.0 { 1.0 } else { target / span };

    for p in paths.iter_mut().flatten() {
        p.x = round4(p.x * scale);
        p.y = round4(p.y * scale);
    }
}

/// Sigma for a given blur kernel size, derived the way OpenCV does when
/// sigma is left unset
fn gaussian_sigma(kernel: (u32, u32)) -> f32 {
    let k = kernel.0.max(kernel.1).max(1) as f32;
    (0.3 * ((k - 1.0) * 0.5 - 1.0) + 0.8).max(0.1)
}

/// Serialize polylines as a compact JSON array of arrays of `{x, y}`
pub fn paths_to_json(paths: &[Polyline]) -> String {
    serde_json::to_string(paths).unwrap_or_else(|_| "[]".to_string())
}

/// Vectorize an image file straight to its JSON representation.
///
/// Collapses decode failure and an empty result into the `[]` literal,
/// reporting the former on stderr.
pub fn image_to_vector_paths(path: &str, options: &VectorizeOptions) -> String {
    match vectorize_image_file(path, options) {
        Ok(paths) => paths_to_json(&paths),
        Err(e) => {
            eprintln!("Error loading image: {}", e);
            "[]".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = VectorizeOptions::default();
        assert_eq!(opts.output_scale_factor, 4.0);
        assert_eq!(opts.blur_kernel, (5, 5));
        assert_eq!(opts.canny_low, 50.0);
        assert_eq!(opts.canny_high, 150.0);
        assert_eq!(opts.epsilon_factor, 0.002);
        assert_eq!(opts.min_contour_area, 10.0);
    }

    #[test]
    fn test_gaussian_sigma_for_common_kernels() {
        // OpenCV's derivation: 0.3 * ((k - 1) * 0.5 - 1) + 0.8
        assert!((gaussian_sigma((5, 5)) - 1.1).abs() < 1e-6);
        assert!((gaussian_sigma((7, 7)) - 1.4).abs() < 1e-6);
        // Asymmetric kernels use the larger axis
        assert!((gaussian_sigma((3, 7)) - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_sigma_stays_positive() {
        assert!(gaussian_sigma((1, 1)) > 0.0);
        assert!(gaussian_sigma((0, 0)) > 0.0);
    }

    #[test]
    fn test_scale_to_extent_matches_target() {
        let mut paths = vec![vec![
            PathPoint { x: -0.25, y: -0.1 },
            PathPoint { x: 0.25, y: 0.1 },
        ]];
        scale_to_extent(&mut paths, 4.0);
        // width 0.5 is the larger span, so it maps to 4.0
        assert_eq!(paths[0][0], PathPoint { x: -2.0, y: -0.8 });
        assert_eq!(paths[0][1], PathPoint { x: 2.0, y: 0.8 });
    }

    #[test]
    fn test_scale_to_extent_degenerate_span() {
        let mut paths = vec![vec![
            PathPoint { x: 0.1, y: 0.2 },
            PathPoint { x: 0.1, y: 0.2 },
        ]];
        scale_to_extent(&mut paths, 4.0);
        assert_eq!(paths[0][0], PathPoint { x: 0.1, y: 0.2 });
    }

    #[test]
    fn test_scale_to_extent_empty() {
        let mut paths: Vec<Polyline> = Vec::new();
        scale_to_extent(&mut paths, 4.0);
        assert!(paths.is_empty());
    }

    #[test]
    fn test_paths_to_json_shape() {
        let paths = vec![vec![
            PathPoint { x: -0.5, y: 0.25 },
            PathPoint { x: 0.5, y: -0.25 },
        ]];
        assert_eq!(
            paths_to_json(&paths),
            r#"[[{"x":-0.5,"y":0.25},{"x":0.5,"y":-0.25}]]"#
        );
    }

    #[test]
    fn test_paths_to_json_empty() {
        assert_eq!(paths_to_json(&[]), "[]");
    }
}
