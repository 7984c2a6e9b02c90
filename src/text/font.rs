//! Font access and glyph outline extraction
//!
//! Wraps `ttf-parser` behind a small [`Typeface`] trait so the layout
//! engine (and its tests) do not depend on a real font file.

use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// A source of glyph metrics and positioned glyph outlines.
///
/// All values are in the font's design units. Outline extraction returns
/// path data already placed in document space: x is offset by the caller's
/// cursor position and y is flipped around the ascender, mapping glyph
/// space (baseline origin, y-up) into document space (top-left origin,
/// y-down).
pub trait Typeface {
    /// Vertical extent above the baseline, in font units.
    fn ascender(&self) -> f64;
    /// Vertical extent below the baseline, in font units. Negative.
    fn descender(&self) -> f64;
    /// Fallback advance applied to characters the font does not map.
    fn max_advance(&self) -> f64;
    /// Advance width for a character, or `None` if the font's character
    /// map has no glyph for it.
    fn glyph_advance(&self, ch: char) -> Option<f64>;
    /// SVG path data for a character's outline positioned at `offset_x`,
    /// or `None` if the character is unmapped or its glyph has no visible
    /// outline (e.g. a space).
    fn glyph_path(&self, ch: char, offset_x: f64) -> Option<String>;
}

/// [`Typeface`] backed by a parsed TrueType/OpenType face.
pub struct FontFace<'a> {
    face: Face<'a>,
    max_advance: f64,
}

impl<'a> FontFace<'a> {
    /// Parse font data (the contents of a .ttf/.otf file).
    pub fn parse(data: &'a [u8]) -> Result<FontFace<'a>, String> {
        let face = Face::parse(data, 0).map_err(|e| format!("Failed to parse font: {}", e))?;

        // ttf-parser does not expose hhea's advanceWidthMax, so recover it
        // from the glyph metrics: fonts set that field to this maximum.
        let max_advance = (0..face.number_of_glyphs())
            .filter_map(|i| face.glyph_hor_advance(GlyphId(i)))
            .max()
            .unwrap_or(0) as f64;

        Ok(FontFace { face, max_advance })
    }
}

impl Typeface for FontFace<'_> {
    fn ascender(&self) -> f64 {
        self.face.ascender() as f64
    }

    fn descender(&self) -> f64 {
        self.face.descender() as f64
    }

    fn max_advance(&self) -> f64 {
        self.max_advance
    }

    fn glyph_advance(&self, ch: char) -> Option<f64> {
        let glyph = self.face.glyph_index(ch)?;
        self.face.glyph_hor_advance(glyph).map(f64::from)
    }

    fn glyph_path(&self, ch: char, offset_x: f64) -> Option<String> {
        let glyph = self.face.glyph_index(ch)?;
        let mut pen = PathPen::new(offset_x, self.ascender());
        // outline_glyph returns None for glyphs with no outline (spaces).
        self.face.outline_glyph(glyph, &mut pen)?;
        let d = pen.finish();
        if d.is_empty() { None } else { Some(d) }
    }
}

/// Format a coordinate, dropping the fraction when it is a whole number
fn f(n: f64) -> String {
    // Handle -0.0 case
    let n = if n == 0.0 { 0.0 } else { n };
    if n == n.trunc() {
        format!("{}", n as i64)
    } else {
        format!("{:.2}", n)
    }
}

/// Outline builder that writes SVG path commands into a string, applying
/// the glyph-space to document-space transform as it goes.
pub struct PathPen {
    d: String,
    offset_x: f64,
    baseline: f64,
}

impl PathPen {
    pub fn new(offset_x: f64, baseline: f64) -> Self {
        PathPen {
            d: String::new(),
            offset_x,
            baseline,
        }
    }

    /// Consume the pen and return the accumulated path data.
    pub fn finish(self) -> String {
        self.d
    }

    fn map(&self, x: f32, y: f32) -> (f64, f64) {
        (self.offset_x + x as f64, self.baseline - y as f64)
    }

    fn push(&mut self, cmd: char, coords: &[(f64, f64)]) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push(cmd);
        for (x, y) in coords {
            self.d.push_str(&format!(" {} {}", f(*x), f(*y)));
        }
    }
}

impl OutlineBuilder for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.push('M', &[p]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.push('L', &[p]);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.map(x1, y1);
        let p = self.map(x, y);
        self.push('Q', &[c, p]);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c0 = self.map(x1, y1);
        let c1 = self.map(x2, y2);
        let p = self.map(x, y);
        self.push('C', &[c0, c1, p]);
    }

    fn close(&mut self) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push('Z');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_applies_offset_and_flip() {
        let mut pen = PathPen::new(100.0, 800.0);
        pen.move_to(10.0, 20.0);
        pen.line_to(30.0, 0.0);
        pen.close();
        assert_eq!(pen.finish(), "M 110 780 L 130 800 Z");
    }

    #[test]
    fn test_pen_curves() {
        let mut pen = PathPen::new(0.0, 0.0);
        pen.move_to(0.0, 0.0);
        pen.quad_to(1.0, 2.0, 3.0, 4.0);
        pen.curve_to(5.0, 6.0, 7.0, 8.0, 9.0, 10.0);
        assert_eq!(pen.finish(), "M 0 0 Q 1 -2 3 -4 C 5 -6 7 -8 9 -10");
    }

    #[test]
    fn test_pen_fractional_coords() {
        let mut pen = PathPen::new(0.5, 0.0);
        pen.move_to(1.0, 0.0);
        assert_eq!(pen.finish(), "M 1.50 0");
    }

    #[test]
    fn test_empty_pen() {
        let pen = PathPen::new(0.0, 0.0);
        assert_eq!(pen.finish(), "");
    }
}
