// SPDX-License-Identifier: MPL-2.0
//! SVG documents: color detection, color replacement and preview rendering.

pub mod document;
pub mod render;
pub mod substitution;

pub use document::SvgDocument;
pub use render::{render_icon, render_preview_sheet, save_png, PreviewOptions, PREVIEW_SIZES};
pub use substitution::{
    apply_color_map, extract_color_spellings, extract_colors, normalize_hex, ColorMapping,
    ColorOccurrenceMap,
};
