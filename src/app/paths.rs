// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` argument, or a test path
//! 2. **Environment variable** `SVG_RECOLOR_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate
//!
//! The override is passed in by the caller rather than stored globally, so the
//! resolved directory travels with the [`crate::app::App`] that uses it.

use std::path::PathBuf;

/// Application name used for directory naming.
pub const APP_NAME: &str = "SvgRecolor";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SVG_RECOLOR_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`.
///
/// # Resolution Order
///
/// 1. `SVG_RECOLOR_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/SvgRecolor/`
///    - macOS: `~/Library/Application Support/SvgRecolor/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\SvgRecolor\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
