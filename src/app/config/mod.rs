// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[folders]` - Input and output folders
//! - `[preview]` - Icon size, backgrounds, contrast and disabled styling
//! - `[palette]` - Custom background colors for each panel
//! - `[swaps]` - Saved old → new color swaps
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `SVG_RECOLOR_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use svg_recolor::config::{self, Panel};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.add_custom_background(Panel::Output, "#336699").unwrap();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::svg::{ColorMapping, PREVIEW_SIZES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// One of the two preview panels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    /// Original icons.
    Input,
    /// Recolored icons.
    Output,
}

impl Panel {
    fn default_background(self) -> &'static str {
        match self {
            Panel::Input => DEFAULT_INPUT_BACKGROUND,
            Panel::Output => DEFAULT_OUTPUT_BACKGROUND,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Input => f.write_str("input"),
            Panel::Output => f.write_str("output"),
        }
    }
}

impl FromStr for Panel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "input" | "in" => Ok(Panel::Input),
            "output" | "out" => Ok(Panel::Output),
            other => Err(Error::Usage(format!(
                "unknown panel '{}', expected input or output",
                other
            ))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Input and output folders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FoldersConfig {
    /// Folder scanned for `.svg` files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Folder the recolored files are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Icon size in pixels (16, 32, 48, 64 or 128).
    #[serde(default = "default_icon_size", skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,

    /// Icons per row in each preview panel.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    /// Background behind the original icons.
    #[serde(
        default = "default_input_background",
        skip_serializing_if = "Option::is_none"
    )]
    pub input_background: Option<String>,

    /// Background behind the recolored icons.
    #[serde(
        default = "default_output_background",
        skip_serializing_if = "Option::is_none"
    )]
    pub output_background: Option<String>,

    /// Whether contrast ratings are shown next to colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_contrast: Option<bool>,

    /// Whether icons are rendered with disabled styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_as_disabled: Option<bool>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            icon_size: default_icon_size(),
            columns: default_columns(),
            input_background: default_input_background(),
            output_background: default_output_background(),
            show_contrast: Some(false),
            style_as_disabled: Some(false),
        }
    }
}

/// Custom background colors offered next to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaletteConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_input_colors: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_output_colors: Vec<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub folders: FoldersConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub palette: PaletteConfig,

    /// Saved old → new swaps, keyed by uppercase hex.
    #[serde(default)]
    pub swaps: ColorMapping,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_icon_size() -> Option<u32> {
    Some(DEFAULT_ICON_SIZE)
}

fn default_columns() -> Option<u32> {
    Some(DEFAULT_PREVIEW_COLUMNS)
}

fn default_input_background() -> Option<String> {
    Some(DEFAULT_INPUT_BACKGROUND.to_string())
}

fn default_output_background() -> Option<String> {
    Some(DEFAULT_OUTPUT_BACKGROUND.to_string())
}

// =============================================================================
// Accessors
// =============================================================================

impl Config {
    /// Configured icon size, or the default when unset or not an offered size.
    pub fn icon_size(&self) -> u32 {
        self.preview
            .icon_size
            .filter(|size| PREVIEW_SIZES.contains(size))
            .unwrap_or(DEFAULT_ICON_SIZE)
    }

    /// Sets the icon size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] for sizes that are not offered.
    pub fn set_icon_size(&mut self, size: u32) -> Result<()> {
        if !PREVIEW_SIZES.contains(&size) {
            return Err(Error::Usage(format!(
                "icon size {} is not one of {:?}",
                size, PREVIEW_SIZES
            )));
        }
        self.preview.icon_size = Some(size);
        Ok(())
    }

    pub fn columns(&self) -> u32 {
        self.preview
            .columns
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_PREVIEW_COLUMNS)
    }

    pub fn show_contrast(&self) -> bool {
        self.preview.show_contrast.unwrap_or(false)
    }

    pub fn set_show_contrast(&mut self, show: bool) {
        self.preview.show_contrast = Some(show);
    }

    pub fn style_as_disabled(&self) -> bool {
        self.preview.style_as_disabled.unwrap_or(false)
    }

    pub fn set_style_as_disabled(&mut self, disabled: bool) {
        self.preview.style_as_disabled = Some(disabled);
    }

    fn selected_background(&self, panel: Panel) -> &Option<String> {
        match panel {
            Panel::Input => &self.preview.input_background,
            Panel::Output => &self.preview.output_background,
        }
    }

    fn selected_background_mut(&mut self, panel: Panel) -> &mut Option<String> {
        match panel {
            Panel::Input => &mut self.preview.input_background,
            Panel::Output => &mut self.preview.output_background,
        }
    }

    fn custom_backgrounds(&self, panel: Panel) -> &Vec<String> {
        match panel {
            Panel::Input => &self.palette.custom_input_colors,
            Panel::Output => &self.palette.custom_output_colors,
        }
    }

    fn custom_backgrounds_mut(&mut self, panel: Panel) -> &mut Vec<String> {
        match panel {
            Panel::Input => &mut self.palette.custom_input_colors,
            Panel::Output => &mut self.palette.custom_output_colors,
        }
    }

    /// Selected background hex for `panel`.
    pub fn background_hex(&self, panel: Panel) -> String {
        self.selected_background(panel)
            .clone()
            .unwrap_or_else(|| panel.default_background().to_string())
    }

    /// Selected background color for `panel`, falling back to the panel
    /// default when the stored value does not parse.
    pub fn background(&self, panel: Panel) -> Color {
        let hex = self.background_hex(panel);
        Color::from_hex(&hex).unwrap_or_else(|e| {
            tracing::warn!("{} background {}: {}", panel, hex, e);
            Color::from_hex(panel.default_background()).unwrap_or(Color::BLACK)
        })
    }

    /// Defaults first, then custom colors in the order they were added.
    pub fn background_choices(&self, panel: Panel) -> Vec<String> {
        DEFAULT_BACKGROUND_COLORS
            .iter()
            .map(|c| c.to_string())
            .chain(self.custom_backgrounds(panel).iter().cloned())
            .collect()
    }

    /// Selects `hex` as the background for `panel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorFormat`] if `hex` is not a color.
    pub fn set_background(&mut self, panel: Panel, hex: &str) -> Result<()> {
        let hex = Color::from_hex(hex)?.to_hex();
        *self.selected_background_mut(panel) = Some(hex);
        Ok(())
    }

    /// Adds a custom background for `panel` and selects it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorFormat`] if `hex` is not a color.
    pub fn add_custom_background(&mut self, panel: Panel, hex: &str) -> Result<()> {
        let hex = Color::from_hex(hex)?.to_hex();
        if !self.background_choices(panel).contains(&hex) {
            self.custom_backgrounds_mut(panel).push(hex.clone());
        }
        *self.selected_background_mut(panel) = Some(hex);
        Ok(())
    }

    /// Removes a custom background. Default backgrounds cannot be removed.
    ///
    /// When the removed color was selected, the panel default is selected
    /// instead. Returns whether a color was removed.
    pub fn remove_custom_background(&mut self, panel: Panel, hex: &str) -> bool {
        let hex = match Color::from_hex(hex) {
            Ok(color) => color.to_hex(),
            Err(_) => return false,
        };
        if DEFAULT_BACKGROUND_COLORS.contains(&hex.as_str()) {
            return false;
        }

        let custom = self.custom_backgrounds_mut(panel);
        let before = custom.len();
        custom.retain(|c| c != &hex);
        if custom.len() == before {
            return false;
        }

        if self.selected_background(panel).as_deref() == Some(hex.as_str()) {
            *self.selected_background_mut(panel) = Some(panel.default_background().to_string());
        }
        true
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(e) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "settings in {} ignored: {}",
                            path.display(),
                            e
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
