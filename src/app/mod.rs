// SPDX-License-Identifier: MPL-2.0
//! Application root state and command execution.
//!
//! The `App` owns the loaded configuration and the directory it came from.
//! Each [`Command`] is executed against that state, printing its results to
//! the given writer. Commands that change folders, swaps, the palette or the
//! preview settings save the configuration before returning.

pub mod config;
pub mod paths;

use crate::cli::{Command, PaletteAction, SettingsAction, SwapAction, HELP};
use crate::color::{
    best_background_for_hex, classify_contrast, contrast_ratio, format_ratio, Color,
    ContrastRating,
};
use crate::directory_scanner::IconSet;
use crate::error::{Error, ExportBlocker, Result};
use crate::export;
use crate::svg::{
    normalize_hex, render_preview_sheet, save_png, PreviewOptions, PREVIEW_SIZES,
};
use crate::swap_table::{SwapRow, SwapTable};
use config::{Config, Panel, DEFAULT_PREVIEW_PADDING};
use std::io::Write;
use std::path::PathBuf;

/// Root application state.
#[derive(Debug, Clone)]
pub struct App {
    config: Config,
    /// Overrides the config directory; `None` uses the default resolution.
    config_dir: Option<PathBuf>,
}

impl App {
    /// Loads the configuration from `config_dir` (or the default location).
    ///
    /// A config file that cannot be read is logged and replaced with defaults.
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        let (config, warning) = config::load_with_override(config_dir.clone());
        if let Some(warning) = warning {
            tracing::warn!("{}", warning);
        }
        Self::with_config(config, config_dir)
    }

    pub fn with_config(config: Config, config_dir: Option<PathBuf>) -> Self {
        Self { config, config_dir }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Executes `command`, writing user-facing output to `out`.
    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        tracing::debug!("running {:?}", command);
        match command {
            Command::Help => write!(out, "{}", HELP)?,
            Command::Version => writeln!(out, "svg_recolor {}", env!("CARGO_PKG_VERSION"))?,
            Command::Scan { input, contrast } => self.scan(input, contrast, out)?,
            Command::Swap(action) => self.swap(action, out)?,
            Command::Apply {
                input,
                output,
                maps,
            } => self.apply(input, output, &maps, out)?,
            Command::Preview {
                out: path,
                input,
                size,
                columns,
                disabled,
            } => self.preview(path, input, size, columns, disabled, out)?,
            Command::Contrast { color, background } => {
                contrast(&color, background.as_deref(), out)?
            }
            Command::Palette(action) => self.palette(action, out)?,
            Command::Settings(action) => self.settings(action, out)?,
        }
        Ok(())
    }

    fn save_config(&self) -> Result<()> {
        config::save_with_override(&self.config, self.config_dir.clone())
    }

    /// Uses `input` and remembers it, or falls back to the saved input folder.
    fn input_folder(&mut self, input: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(input) = input {
            self.config.folders.input = Some(input);
        }
        self.config
            .folders
            .input
            .clone()
            .ok_or(Error::Export(ExportBlocker::NoInputFolder))
    }

    /// Scans the input folder and restores the saved swaps onto its colors.
    fn load_table(&mut self, input: Option<PathBuf>) -> Result<(IconSet, SwapTable)> {
        let folder = self.input_folder(input)?;
        let set = IconSet::scan(&folder)?;
        let mut table = SwapTable::from_colors(&set.colors());
        table.restore(&self.config.swaps);
        Ok((set, table))
    }

    fn scan<W: Write>(&mut self, input: Option<PathBuf>, contrast: bool, out: &mut W) -> Result<()> {
        let remember = input.is_some();
        let (set, table) = self.load_table(input)?;
        if remember {
            self.save_config()?;
        }

        writeln!(
            out,
            "Found {} .svg files in {}",
            set.len(),
            set.folder().display()
        )?;
        let show_contrast = contrast || self.config.show_contrast();
        let backgrounds = (
            self.config.background(Panel::Input),
            self.config.background(Panel::Output),
        );
        if table.is_empty() {
            writeln!(out, "No colors detected")?;
        }
        for row in table.rows() {
            writeln!(out, "{}", describe_row(row, show_contrast.then_some(backgrounds)))?;
        }
        Ok(())
    }

    fn swap<W: Write>(&mut self, action: SwapAction, out: &mut W) -> Result<()> {
        match action {
            SwapAction::List => {
                if self.config.swaps.is_empty() {
                    writeln!(out, "No swaps saved")?;
                }
                for (old, new) in &self.config.swaps {
                    writeln!(out, "{} -> {}", old, new)?;
                }
            }
            SwapAction::Set { old, new } => {
                let (set, mut table) = self.load_table(None)?;
                table.set_swap(&old, &new)?;
                let (old, new) = (normalize_hex(&old), normalize_hex(&new));
                let files = set.documents_using(&old).len();
                self.config.swaps.insert(old.clone(), new.clone());
                self.save_config()?;
                writeln!(out, "{} -> {} ({} files)", old, new, files)?;
            }
            SwapAction::Clear { old } => {
                let old = normalize_hex(&old);
                if self.config.swaps.remove(&old).is_some() {
                    self.save_config()?;
                    writeln!(out, "Cleared swap for {}", old)?;
                } else {
                    writeln!(out, "No swap saved for {}", old)?;
                }
            }
        }
        Ok(())
    }

    fn apply<W: Write>(
        &mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        maps: &[(String, String)],
        out: &mut W,
    ) -> Result<()> {
        if let Some(output) = output {
            self.config.folders.output = Some(output);
        }
        let (set, mut table) = self.load_table(input)?;
        let output = self.config.folders.output.clone();
        export::check_ready(Some(set.folder()), output.as_deref(), set.len())?;
        self.save_config()?;
        let output = output.ok_or(ExportBlocker::NoOutputFolder)?;

        for (old, new) in maps {
            table.set_swap(old, new)?;
        }

        let report = export::write_all(&set, &table.to_mapping(), &output)?;
        writeln!(out, "{}", report.summary())?;
        for (path, reason) in &report.failed {
            writeln!(out, "  failed {}: {}", path.display(), reason)?;
        }
        Ok(())
    }

    fn preview<W: Write>(
        &mut self,
        path: PathBuf,
        input: Option<PathBuf>,
        size: Option<u32>,
        columns: Option<u32>,
        disabled: bool,
        out: &mut W,
    ) -> Result<()> {
        let icon_size = match size {
            Some(size) if PREVIEW_SIZES.contains(&size) => size,
            Some(size) => {
                return Err(Error::Usage(format!(
                    "icon size {} is not one of {:?}",
                    size, PREVIEW_SIZES
                )))
            }
            None => self.config.icon_size(),
        };
        let remember = input.is_some();
        let (set, table) = self.load_table(input)?;
        if remember {
            self.save_config()?;
        }

        let options = PreviewOptions {
            icon_size,
            columns: columns.filter(|&c| c > 0).unwrap_or(self.config.columns()),
            padding: DEFAULT_PREVIEW_PADDING,
            input_background: self.config.background(Panel::Input),
            output_background: self.config.background(Panel::Output),
            disabled: disabled || self.config.style_as_disabled(),
        };
        let sheet = render_preview_sheet(&set, &table.to_mapping(), &options)?;
        save_png(&sheet, &path)?;
        writeln!(
            out,
            "Wrote preview of {} icons to {}",
            set.len(),
            path.display()
        )?;
        Ok(())
    }

    fn palette<W: Write>(&mut self, action: PaletteAction, out: &mut W) -> Result<()> {
        match action {
            PaletteAction::List(panel) => {
                let selected = self.config.background_hex(panel);
                for hex in self.config.background_choices(panel) {
                    let marker = if hex == selected { "*" } else { " " };
                    writeln!(out, "{} {}", marker, hex)?;
                }
            }
            PaletteAction::Add(panel, hex) => {
                self.config.add_custom_background(panel, &hex)?;
                self.save_config()?;
                writeln!(
                    out,
                    "{} background set to {}",
                    panel,
                    self.config.background_hex(panel)
                )?;
            }
            PaletteAction::Remove(panel, hex) => {
                if !self.config.remove_custom_background(panel, &hex) {
                    return Err(Error::Usage(format!(
                        "{} is not a custom {} background",
                        hex, panel
                    )));
                }
                self.save_config()?;
                writeln!(out, "Removed {} from {} backgrounds", hex, panel)?;
            }
            PaletteAction::Select(panel, hex) => {
                self.config.set_background(panel, &hex)?;
                self.save_config()?;
                writeln!(
                    out,
                    "{} background set to {}",
                    panel,
                    self.config.background_hex(panel)
                )?;
            }
        }
        Ok(())
    }

    fn settings<W: Write>(&mut self, action: SettingsAction, out: &mut W) -> Result<()> {
        let changed = action != SettingsAction::Show;
        match action {
            SettingsAction::Show => {}
            SettingsAction::IconSize(size) => self.config.set_icon_size(size)?,
            SettingsAction::ShowContrast(show) => self.config.set_show_contrast(show),
            SettingsAction::StyleAsDisabled(disabled) => {
                self.config.set_style_as_disabled(disabled)
            }
        }
        if changed {
            self.save_config()?;
        }

        writeln!(out, "icon-size = {}", self.config.icon_size())?;
        writeln!(out, "show-contrast = {}", on_off(self.config.show_contrast()))?;
        writeln!(out, "disabled = {}", on_off(self.config.style_as_disabled()))?;
        writeln!(
            out,
            "input-background = {}",
            self.config.background_hex(Panel::Input)
        )?;
        writeln!(
            out,
            "output-background = {}",
            self.config.background_hex(Panel::Output)
        )?;
        Ok(())
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// One line of the scan listing.
fn describe_row(row: &SwapRow, backgrounds: Option<(Color, Color)>) -> String {
    let mut line = format!("{:<9} x{:<5}", row.old, row.occurrences);
    let rated = |ratio: Option<f64>, rating: Option<ContrastRating>| match (ratio, rating) {
        (Some(ratio), Some(rating)) => format!(" {:>7} {}", format_ratio(ratio), rating.symbol()),
        _ => String::new(),
    };

    let contrast = backgrounds.map(|(input, output)| SwapTable::row_contrast(row, input, output));
    if let Some(contrast) = &contrast {
        line.push_str(&rated(contrast.old, contrast.old_rating()));
    }
    if let Some(new) = &row.new {
        line.push_str(&format!(" -> {}", new));
        if let Some(contrast) = &contrast {
            line.push_str(&rated(contrast.new, contrast.new_rating()));
        }
    }
    line.trim_end().to_string()
}

fn contrast<W: Write>(color: &str, background: Option<&str>, out: &mut W) -> Result<()> {
    let parsed = Color::from_hex(color)?;
    let backgrounds = match background {
        Some(background) => vec![Color::from_hex(background)?],
        None => vec![Color::WHITE, Color::BLACK],
    };
    for background in backgrounds {
        let ratio = contrast_ratio(parsed, background);
        let rating = classify_contrast(ratio);
        writeln!(
            out,
            "{} on {}: {} {} {}",
            parsed,
            background,
            format_ratio(ratio),
            rating.symbol(),
            rating
        )?;
    }
    writeln!(out, "Best background: {}", best_background_for_hex(color)?)?;
    Ok(())
}
