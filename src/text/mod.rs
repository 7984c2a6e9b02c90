//! Text vectorization module
//!
//! Lays out a text string with a font and produces SVG path data, one path
//! per drawable glyph, plus the overall document extent.
//!
//! The conversion process:
//! 1. Parse the font and read its vertical metrics
//! 2. Walk the string character by character, advancing a horizontal cursor
//! 3. For each mapped glyph with a visible outline, emit its path data
//!    translated to the cursor position
//! 4. Serialize the collected paths as a full SVG document or an inline
//!    snippet

mod font;
mod svg;

pub use font::{FontFace, PathPen, Typeface};
pub use svg::{inline_svg, svg_document, write_svg_file};

/// Result of laying out a phrase: positioned path data plus extent.
#[derive(Debug, Clone)]
pub struct PhraseLayout {
    /// One SVG `d` string per drawable glyph, in text order.
    pub paths: Vec<String>,
    /// Final cursor position (sum of all advances), in font units.
    pub width: f64,
    /// Ascender minus descender, in font units.
    pub height: f64,
}

/// Lay out `text` with the given typeface.
///
/// The cursor starts at zero and advances per character:
/// - unmapped character: advance by the face's maximum advance, emit nothing
/// - mapped glyph with no outline (whitespace): advance by its own advance,
///   emit nothing
/// - mapped glyph with an outline: emit the positioned path, then advance
///
/// Fails when zero paths are produced (empty text, all-whitespace text, or
/// a font that maps none of the characters); an empty SVG document would be
/// a silent near-failure.
pub fn layout_phrase(face: &impl Typeface, text: &str) -> Result<PhraseLayout, String> {
    let mut cursor = 0.0_f64;
    let mut paths: Vec<String> = Vec::new();

    for ch in text.chars() {
        match face.glyph_advance(ch) {
            None => {
                cursor += face.max_advance();
            }
            Some(advance) => {
                if let Some(d) = face.glyph_path(ch, cursor) {
                    paths.push(d);
                }
                cursor += advance;
            }
        }
    }

    if paths.is_empty() {
        return Err("No paths created - check font & text.".to_string());
    }

    Ok(PhraseLayout {
        paths,
        width: cursor,
        height: face.ascender() - face.descender(),
    })
}
