// SPDX-License-Identifier: MPL-2.0
//! WCAG 2.0 relative luminance and contrast ratio.
//!
//! Formulas follow <https://www.w3.org/TR/WCAG20-TECHS/G17.html>. The same
//! 4.5:1 and 3:1 thresholds used for normal and large text are applied to
//! icons against their background.

use super::model::Color;
use crate::error::Result;
use std::fmt;

/// Ratio at or above which contrast is rated [`ContrastRating::Good`].
pub const GOOD_RATIO_THRESHOLD: f64 = 4.5;

/// Ratio at or above which contrast is rated [`ContrastRating::Acceptable`].
pub const ACCEPTABLE_RATIO_THRESHOLD: f64 = 3.0;

/// Backgrounds tried by [`best_background_for_hex`], in tie-break order.
pub const DEFAULT_BACKGROUND_CANDIDATES: [Color; 2] = [Color::WHITE, Color::BLACK];

/// Accessibility rating of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastRating {
    /// Ratio ≥ 4.5.
    Good,
    /// 3 ≤ ratio < 4.5.
    Acceptable,
    /// Ratio < 3.
    Poor,
}

impl ContrastRating {
    /// Marker shown next to a formatted ratio.
    pub fn symbol(self) -> &'static str {
        match self {
            ContrastRating::Good => "\u{1F44D}",
            ContrastRating::Acceptable => "\u{1F44C}",
            ContrastRating::Poor => "\u{1F44E}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContrastRating::Good => "good",
            ContrastRating::Acceptable => "acceptable",
            ContrastRating::Poor => "poor",
        }
    }
}

impl fmt::Display for ContrastRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Linearizes one normalized sRGB channel.
#[inline]
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0,1].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.normalized().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio in [1,21]. Order of the arguments does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (l1, l2) = {
        let la = relative_luminance(a);
        let lb = relative_luminance(b);
        if la >= lb {
            (la, lb)
        } else {
            (lb, la)
        }
    };
    (l1 + 0.05) / (l2 + 0.05)
}

#[must_use]
pub fn classify_contrast(ratio: f64) -> ContrastRating {
    if ratio >= GOOD_RATIO_THRESHOLD {
        ContrastRating::Good
    } else if ratio >= ACCEPTABLE_RATIO_THRESHOLD {
        ContrastRating::Acceptable
    } else {
        ContrastRating::Poor
    }
}

/// Renders a ratio as `"<value>:1"` with one decimal.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}:1", ratio)
}

/// Picks the candidate with the highest contrast against `color`.
///
/// On equal ratios the candidate listed first wins. Returns `None` when
/// `candidates` is empty.
#[must_use]
pub fn best_contrasting_choice(color: Color, candidates: &[Color]) -> Option<Color> {
    let mut best: Option<(Color, f64)> = None;
    for &candidate in candidates {
        let ratio = contrast_ratio(color, candidate);
        match best {
            Some((_, best_ratio)) if ratio <= best_ratio => {}
            _ => best = Some((candidate, ratio)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Contrast ratio between two hex color strings.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidColorFormat`] if either string does
/// not parse.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(Color::from_hex(a)?, Color::from_hex(b)?))
}

/// Black or white, whichever reads best on top of (or underneath) `color`.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidColorFormat`] if `color` does not parse.
pub fn best_background_for_hex(color: &str) -> Result<Color> {
    let color = Color::from_hex(color)?;
    Ok(best_contrasting_choice(color, &DEFAULT_BACKGROUND_CANDIDATES).unwrap_or(Color::WHITE))
}
