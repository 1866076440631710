// SPDX-License-Identifier: MPL-2.0
//! A single SVG file together with the colors detected in it.

use super::substitution::{
    apply_color_map, extract_color_spellings, extract_colors, normalize_hex, ColorMapping,
    ColorOccurrenceMap, ColorSpellings,
};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    path: PathBuf,
    content: String,
    colors: ColorOccurrenceMap,
    spellings: ColorSpellings,
}

impl SvgDocument {
    /// Reads an SVG file as UTF-8 text and scans it for colors.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Io`] if the file cannot be read or is not
    /// valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Ok(Self::from_source(path, content))
    }

    /// Builds a document from text already in memory.
    pub fn from_source(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let spellings = extract_color_spellings(&content);
        let colors = extract_colors(&content);
        Self {
            path: path.into(),
            content,
            colors,
            spellings,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name shown under the icon preview.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn colors(&self) -> &ColorOccurrenceMap {
        &self.colors
    }

    /// Whether `hex` occurs in this file, in any letter case.
    pub fn uses_color(&self, hex: &str) -> bool {
        self.colors.contains_key(&normalize_hex(hex))
    }

    /// Re-keys a mapping onto the spellings that actually occur in this file.
    ///
    /// A key like `#FF0000` also covers `#ff0000` when the file spells it that
    /// way. Keys that are not detected colors are passed through unchanged so
    /// literal replacements keep working.
    pub fn expand_mapping(&self, mapping: &ColorMapping) -> ColorMapping {
        let mut expanded = ColorMapping::new();
        for (old, new) in mapping {
            expanded.insert(old.clone(), new.clone());
            if let Some(raw) = self.spellings.get(&normalize_hex(old)) {
                for spelling in raw {
                    expanded
                        .entry(spelling.clone())
                        .or_insert_with(|| new.clone());
                }
            }
        }
        expanded
    }

    /// The file's text with `mapping` applied.
    pub fn mapped_content(&self, mapping: &ColorMapping) -> String {
        if mapping.is_empty() {
            return self.content.clone();
        }
        apply_color_map(&self.content, &self.expand_mapping(mapping))
    }
}
