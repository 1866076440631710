// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing with `pico-args`.
//!
//! Global options may appear anywhere on the command line. The first
//! remaining free argument names the command.

use crate::app::config::Panel;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub const HELP: &str = "\
svg_recolor - batch-recolor SVG icon sets

USAGE:
  svg_recolor [OPTIONS] <COMMAND>

COMMANDS:
  scan [--input DIR] [--contrast]
        List the colors used by the icons with their counts and swaps
  swap OLD NEW | swap --clear OLD | swap --list
        Edit the saved color swaps
  apply [--input DIR] [--output DIR] [--map OLD=NEW]...
        Write recolored copies of every icon to the output folder
  preview --out FILE.png [--input DIR] [--size N] [--columns N] [--disabled]
        Render original and recolored icons side by side
  contrast COLOR [BACKGROUND]
        Show the contrast ratio and the best background for a color
  palette list|add|remove|select input|output [HEX]
        Manage preview background colors
  settings [icon-size N | show-contrast on|off | disabled on|off]
        Show or change the saved preview settings

OPTIONS:
  --config-dir DIR   Use DIR instead of the default config directory
  -v, --verbose      Print debug logs to stderr
  -h, --help         Print this help
  -V, --version      Print the version
";

/// Options accepted by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub config_dir: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapAction {
    Set { old: String, new: String },
    Clear { old: String },
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    List(Panel),
    Add(Panel, String),
    Remove(Panel, String),
    Select(Panel, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    Show,
    IconSize(u32),
    ShowContrast(bool),
    StyleAsDisabled(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scan {
        input: Option<PathBuf>,
        contrast: bool,
    },
    Swap(SwapAction),
    Apply {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        /// Extra swaps for this run only, applied over the saved ones.
        maps: Vec<(String, String)>,
    },
    Preview {
        out: PathBuf,
        input: Option<PathBuf>,
        size: Option<u32>,
        columns: Option<u32>,
        disabled: bool,
    },
    Contrast {
        color: String,
        background: Option<String>,
    },
    Palette(PaletteAction),
    Settings(SettingsAction),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub options: GlobalOptions,
    pub command: Command,
}

/// Parses the process arguments.
pub fn parse_env() -> Result<Cli> {
    parse(pico_args::Arguments::from_env())
}

/// Parses `args`, which must not include the program name.
pub fn parse(mut args: pico_args::Arguments) -> Result<Cli> {
    let options = GlobalOptions {
        config_dir: args.opt_value_from_os_str("--config-dir", to_path)?,
        verbose: args.contains(["-v", "--verbose"]),
    };

    if args.contains(["-h", "--help"]) {
        return Ok(Cli {
            options,
            command: Command::Help,
        });
    }
    if args.contains(["-V", "--version"]) {
        return Ok(Cli {
            options,
            command: Command::Version,
        });
    }

    let command = match args.subcommand()?.as_deref() {
        Some("scan") => Command::Scan {
            input: args.opt_value_from_os_str("--input", to_path)?,
            contrast: args.contains("--contrast"),
        },
        Some("swap") => Command::Swap(parse_swap(&mut args)?),
        Some("apply") => Command::Apply {
            input: args.opt_value_from_os_str("--input", to_path)?,
            output: args.opt_value_from_os_str("--output", to_path)?,
            maps: args.values_from_fn("--map", parse_map_pair)?,
        },
        Some("preview") => Command::Preview {
            out: args.value_from_os_str("--out", to_path)?,
            input: args.opt_value_from_os_str("--input", to_path)?,
            size: args.opt_value_from_str("--size")?,
            columns: args.opt_value_from_str("--columns")?,
            disabled: args.contains("--disabled"),
        },
        Some("contrast") => Command::Contrast {
            color: args.free_from_str()?,
            background: args.opt_free_from_str()?,
        },
        Some("palette") => Command::Palette(parse_palette(&mut args)?),
        Some("settings") => Command::Settings(parse_settings(&mut args)?),
        Some(other) => return Err(Error::Usage(format!("unknown command '{}'", other))),
        None => return Err(Error::Usage("no command given, see --help".into())),
    };

    reject_leftovers(args.finish())?;
    Ok(Cli { options, command })
}

fn parse_swap(args: &mut pico_args::Arguments) -> Result<SwapAction> {
    if args.contains("--list") {
        return Ok(SwapAction::List);
    }
    if let Some(old) = args.opt_value_from_str("--clear")? {
        return Ok(SwapAction::Clear { old });
    }
    match args.opt_free_from_str::<String>()? {
        Some(old) => Ok(SwapAction::Set {
            old,
            new: args.free_from_str()?,
        }),
        None => Ok(SwapAction::List),
    }
}

fn parse_palette(args: &mut pico_args::Arguments) -> Result<PaletteAction> {
    let action: String = args.free_from_str()?;
    let panel: Panel = args.free_from_str()?;
    match action.as_str() {
        "list" => Ok(PaletteAction::List(panel)),
        "add" => Ok(PaletteAction::Add(panel, args.free_from_str()?)),
        "remove" => Ok(PaletteAction::Remove(panel, args.free_from_str()?)),
        "select" => Ok(PaletteAction::Select(panel, args.free_from_str()?)),
        other => Err(Error::Usage(format!(
            "unknown palette action '{}', expected list, add, remove or select",
            other
        ))),
    }
}

fn parse_settings(args: &mut pico_args::Arguments) -> Result<SettingsAction> {
    let Some(key) = args.opt_free_from_str::<String>()? else {
        return Ok(SettingsAction::Show);
    };
    match key.as_str() {
        "icon-size" => Ok(SettingsAction::IconSize(args.free_from_str()?)),
        "show-contrast" => Ok(SettingsAction::ShowContrast(parse_switch(
            &args.free_from_str::<String>()?,
        )?)),
        "disabled" => Ok(SettingsAction::StyleAsDisabled(parse_switch(
            &args.free_from_str::<String>()?,
        )?)),
        other => Err(Error::Usage(format!(
            "unknown setting '{}', expected icon-size, show-contrast or disabled",
            other
        ))),
    }
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(Error::Usage(format!("expected on or off, got '{}'", other))),
    }
}

fn to_path(s: &std::ffi::OsStr) -> std::result::Result<PathBuf, &'static str> {
    Ok(PathBuf::from(s))
}

fn parse_map_pair(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((old, new)) if !old.trim().is_empty() && !new.trim().is_empty() => {
            Ok((old.trim().to_string(), new.trim().to_string()))
        }
        _ => Err(format!("expected OLD=NEW, got '{}'", s)),
    }
}

fn reject_leftovers(rest: Vec<OsString>) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::Usage(format!("unexpected arguments: {:?}", rest)))
    }
}
