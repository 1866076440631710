// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    InvalidColorFormat(String),
    Export(ExportBlocker),
    Usage(String),
}

/// Reasons a batch export cannot start.
/// Checked in this order before any file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportBlocker {
    /// No input folder has been chosen.
    NoInputFolder,

    /// The input folder holds no `.svg` files.
    NoSvgFiles,

    /// No output folder has been chosen.
    NoOutputFolder,

    /// Input and output point at the same folder.
    SameFolder,

    /// The output folder exists but cannot be written to.
    OutputNotWritable,
}

impl fmt::Display for ExportBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportBlocker::NoInputFolder => write!(f, "Set an input folder to proceed"),
            ExportBlocker::NoSvgFiles => write!(f, "Input folder doesn't contain any SVGs"),
            ExportBlocker::NoOutputFolder => write!(f, "Set an output folder to proceed"),
            ExportBlocker::SameFolder => {
                write!(f, "The output folder has to differ from the input folder")
            }
            ExportBlocker::OutputNotWritable => {
                write!(f, "No write permissions on the output folder")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidColorFormat(e) => write!(f, "Invalid color format: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ExportBlocker> for Error {
    fn from(err: ExportBlocker) -> Self {
        Error::Export(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Svg(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn svg_error_from_string() {
        let err: Error = "invalid svg data".to_string().into();
        match err {
            Error::Svg(message) => assert!(message.contains("invalid svg")),
            _ => panic!("expected Svg variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_color_names_the_input() {
        let err = Error::InvalidColorFormat("#GG0000".into());
        assert_eq!(format!("{}", err), "Invalid color format: #GG0000");
    }

    #[test]
    fn export_blocker_converts_and_displays_user_message() {
        let err: Error = ExportBlocker::SameFolder.into();
        assert!(matches!(err, Error::Export(ExportBlocker::SameFolder)));
        assert_eq!(
            format!("{}", err),
            "Export Error: The output folder has to differ from the input folder"
        );
    }

    #[test]
    fn pico_args_error_becomes_usage() {
        let err: Error = pico_args::Error::MissingArgument.into();
        assert!(matches!(err, Error::Usage(_)));
    }
}
