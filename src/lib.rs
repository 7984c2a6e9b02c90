//! # scene-vector-tools
//!
//! A Rust library for turning text and raster images into vector data for
//! web scenes.
//!
//! ## Features
//!
//! - **Text to SVG**: Render a text string with a TrueType/OpenType font
//!   into SVG path data, as a full document or an inline snippet
//! - **Image Vectorization**: Trace the edges of a raster image into a set
//!   of simplified 2D polylines serialized as a JSON array
//!
//! ## Example - Text Layout
//!
//! ```rust,ignore
//! use scene_vector_tools::text::{FontFace, layout_phrase, write_svg_file};
//!
//! let data = std::fs::read("font.ttf").unwrap();
//! let face = FontFace::parse(&data).unwrap();
//! let layout = layout_phrase(&face, "Marco Polo").unwrap();
//! write_svg_file(&layout, "title.svg").unwrap();
//! ```
//!
//! ## Example - Image Vectorization
//!
//! ```rust,ignore
//! use scene_vector_tools::vectorize::{VectorizeOptions, image_to_vector_paths};
//!
//! let json = image_to_vector_paths("input.png", &VectorizeOptions::default());
//! println!("const vectorizedImagePaths = {json};");
//! ```

pub mod text;
pub mod vectorize;

// Re-export commonly used items
pub use text::{FontFace, PhraseLayout, Typeface, inline_svg, layout_phrase, write_svg_file};
pub use vectorize::{
    PathPoint, Polyline, VectorizeOptions, image_to_vector_paths, paths_to_json, vectorize_gray,
    vectorize_image, vectorize_image_file,
};
