// SPDX-License-Identifier: MPL-2.0
//! Color values and WCAG contrast evaluation.
//!
//! [`Color`] is a plain sRGB triple. The [`contrast`] module computes relative
//! luminance and contrast ratios between colors and rates them against the
//! WCAG 2.0 minimum contrast thresholds.

pub mod contrast;
pub mod model;

pub use contrast::{
    best_background_for_hex, best_contrasting_choice, classify_contrast, contrast_ratio,
    contrast_ratio_hex, format_ratio, relative_luminance, ContrastRating,
    DEFAULT_BACKGROUND_CANDIDATES,
};
pub use model::Color;
