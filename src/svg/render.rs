// SPDX-License-Identifier: MPL-2.0
//! Rasterizing SVG text with resvg and laying icons out on preview sheets.
//!
//! A preview sheet has two panels side by side: the original icons on the
//! input background on the left, the recolored icons on the output
//! background on the right, in the same grid positions.

use super::substitution::ColorMapping;
use crate::color::Color;
use crate::directory_scanner::IconSet;
use crate::error::{Error, Result};
use resvg::usvg;
use std::fs;
use std::path::Path;
use tiny_skia::{Paint, Pixmap, PixmapPaint, PremultipliedColorU8, Rect, Transform};

/// Icon sizes offered for previews, in pixels.
pub const PREVIEW_SIZES: [u32; 5] = [16, 32, 48, 64, 128];

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// Edge length of the square each icon is fitted into.
    pub icon_size: u32,
    /// Icons per row in each panel.
    pub columns: u32,
    /// Empty space around each icon.
    pub padding: u32,
    pub input_background: Color,
    pub output_background: Color,
    /// Render icons grayed out, the way a toolkit draws disabled icons.
    pub disabled: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            icon_size: 64,
            columns: 8,
            padding: 8,
            input_background: Color::BLACK,
            output_background: Color::WHITE,
            disabled: false,
        }
    }
}

/// Renders SVG text centered in a `size` x `size` pixmap, keeping its aspect ratio.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the text does not parse, the SVG has empty
/// dimensions, or `size` is zero.
pub fn render_icon(svg_text: &str, size: u32, disabled: bool) -> Result<Pixmap> {
    let tree = usvg::Tree::from_str(svg_text, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let tree_size = tree.size();
    let (width, height) = (tree_size.width(), tree_size.height());
    if width <= 0.0 || height <= 0.0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap =
        Pixmap::new(size, size).ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    let scale = size as f32 / width.max(height);
    let tx = (size as f32 - width * scale) / 2.0;
    let ty = (size as f32 - height * scale) / 2.0;
    let transform = Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    if disabled {
        apply_disabled_style(&mut pixmap);
    }
    Ok(pixmap)
}

/// Grays out a pixmap and halves its opacity.
fn apply_disabled_style(pixmap: &mut Pixmap) {
    for pixel in pixmap.pixels_mut() {
        let alpha = pixel.alpha();
        if alpha == 0 {
            continue;
        }
        // Premultiplied channels never exceed alpha, so neither does their weighted sum.
        let gray = (0.299 * f32::from(pixel.red())
            + 0.587 * f32::from(pixel.green())
            + 0.114 * f32::from(pixel.blue()))
        .round()
        .min(f32::from(alpha)) as u8;

        if let Some(dimmed) = PremultipliedColorU8::from_rgba(gray / 2, gray / 2, gray / 2, alpha / 2)
        {
            *pixel = dimmed;
        }
    }
}

/// Builds the side-by-side preview of `set` with `mapping` applied on the right.
///
/// Icons that fail to render leave their cell empty.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the sheet dimensions overflow or the sheet
/// itself cannot be allocated.
pub fn render_preview_sheet(
    set: &IconSet,
    mapping: &ColorMapping,
    options: &PreviewOptions,
) -> Result<Pixmap> {
    let count = u32::try_from(set.len()).unwrap_or(u32::MAX);
    // More columns than icons would only add empty cells.
    let columns = options.columns.clamp(1, count.max(1));
    let rows = count.div_ceil(columns).max(1);

    let too_large = || {
        Error::Svg(format!(
            "preview sheet of {} x {} icons at {}px is too large",
            columns, rows, options.icon_size
        ))
    };
    let cell = options
        .padding
        .checked_mul(2)
        .and_then(|p| p.checked_add(options.icon_size))
        .ok_or_else(too_large)?;
    let panel_width = columns.checked_mul(cell).ok_or_else(too_large)?;
    let panel_height = rows.checked_mul(cell).ok_or_else(too_large)?;
    let sheet_width = panel_width.checked_mul(2).ok_or_else(too_large)?;

    let mut sheet = Pixmap::new(sheet_width, panel_height)
        .ok_or_else(|| Error::Svg("Failed to allocate preview sheet".into()))?;

    fill_panel(&mut sheet, 0, panel_width, panel_height, options.input_background);
    fill_panel(
        &mut sheet,
        panel_width,
        panel_width,
        panel_height,
        options.output_background,
    );

    for (index, document) in set.documents().iter().enumerate() {
        let index = index as u32;
        let x = (index % columns) * cell + options.padding;
        let y = (index / columns) * cell + options.padding;

        let sides = [
            (x, document.content().to_string()),
            (panel_width + x, document.mapped_content(mapping)),
        ];
        for (left, text) in sides {
            match render_icon(&text, options.icon_size, options.disabled) {
                Ok(icon) => sheet.draw_pixmap(
                    left as i32,
                    y as i32,
                    icon.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                ),
                Err(e) => {
                    tracing::warn!("skipping preview of {}: {}", document.path().display(), e);
                }
            }
        }
    }

    Ok(sheet)
}

fn fill_panel(sheet: &mut Pixmap, left: u32, width: u32, height: u32, color: Color) {
    let Some(rect) = Rect::from_xywh(left as f32, 0.0, width as f32, height as f32) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    sheet.fill_rect(rect, &paint, Transform::identity(), None);
}

/// Writes a pixmap as PNG, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created and
/// [`Error::Svg`] if encoding or writing the PNG fails.
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    pixmap
        .save_png(path)
        .map_err(|e| Error::Svg(e.to_string()))
}
