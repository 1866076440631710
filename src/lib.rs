// SPDX-License-Identifier: MPL-2.0
//! `svg_recolor` batch-recolors folders of SVG icons.
//!
//! It detects the hex colors used across a set of icons, lets the user pick
//! replacements, rates foreground/background pairs against the WCAG contrast
//! thresholds, and writes recolored copies to an output folder. Preview
//! sheets of the original and recolored icons are rendered with resvg.

#![doc(html_root_url = "https://docs.rs/svg_recolor/0.1.0")]

pub mod app;
pub mod cli;
pub mod color;
pub mod directory_scanner;
pub mod error;
pub mod export;
pub mod svg;
pub mod swap_table;

pub use app::config;

#[cfg(test)]
mod test_utils;
