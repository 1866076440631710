// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default edge length of icon previews, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Default number of icons per row in a preview panel.
pub const DEFAULT_PREVIEW_COLUMNS: u32 = 8;

/// Space left around each icon in a preview panel, in pixels.
pub const DEFAULT_PREVIEW_PADDING: u32 = 8;

// ==========================================================================
// Background Defaults
// ==========================================================================

/// Background behind the original icons.
pub const DEFAULT_INPUT_BACKGROUND: &str = "#000000";

/// Background behind the recolored icons.
pub const DEFAULT_OUTPUT_BACKGROUND: &str = "#FFFFFF";

/// Backgrounds that are always offered and cannot be removed.
pub const DEFAULT_BACKGROUND_COLORS: [&str; 2] = ["#000000", "#FFFFFF"];
