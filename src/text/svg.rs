//! SVG serialization for laid-out text
//!
//! Two output modes over identical path data and styling: a complete
//! standalone document persisted to disk, or a minimal inline fragment
//! (viewBox only, responsive) printed for embedding in a larger page.

use super::PhraseLayout;
use std::fs;
use std::path::Path;

/// Group styling shared by both output modes.
const GROUP_ATTRS: &str = "id=\"title-paths\" fill=\"none\" stroke=\"#5d4037\" \
stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"";

fn path_elements(paths: &[String], indent: &str) -> String {
    paths
        .iter()
        .map(|d| format!("{indent}<path d=\"{d}\"/>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble a complete SVG document for a phrase layout.
///
/// Width and height attributes (and the viewBox) are the layout extent
/// truncated to whole pixels.
pub fn svg_document(layout: &PhraseLayout) -> String {
    let w = layout.width as i64;
    let h = layout.height as i64;
    let paths = path_elements(&layout.paths, "        ");

    format!(
        r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
    <g {GROUP_ATTRS}>
{paths}
    </g>
</svg>"##
    )
}

/// Assemble a minimal inline SVG fragment for a phrase layout.
///
/// No explicit width/height; the viewBox plus `preserveAspectRatio` keep
/// the fragment responsive when embedded.
pub fn inline_svg(layout: &PhraseLayout) -> String {
    let w = layout.width as i64;
    let h = layout.height as i64;
    let paths = path_elements(&layout.paths, "        ");

    format!(
        r##"<svg id="title-svg" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet" class="animated-svg-title">
    <g {GROUP_ATTRS}>
{paths}
    </g>
</svg>"##
    )
}

/// Serialize a phrase layout as a full SVG document and write it to disk
/// in a single shot.
pub fn write_svg_file<P: AsRef<Path>>(layout: &PhraseLayout, out: P) -> Result<(), String> {
    let svg = svg_document(layout);
    fs::write(out.as_ref(), svg)
        .map_err(|e| format!("Failed to write '{}': {}", out.as_ref().display(), e))
}
