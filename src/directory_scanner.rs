// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and loading SVG icons.
//!
//! This module scans a single folder (not its subfolders) for `.svg` files,
//! sorts them by file name, and loads each one into an [`SvgDocument`].

use crate::error::{Error, Result};
use crate::svg::{normalize_hex, ColorOccurrenceMap, SvgDocument};
use std::path::{Path, PathBuf};

/// The icons found in one input folder.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSet {
    folder: PathBuf,
    documents: Vec<SvgDocument>,
}

impl IconSet {
    /// Scans a folder for SVG files and loads them in file name order.
    ///
    /// Files that cannot be read are skipped with a warning so one broken
    /// icon does not hide the rest of the set.
    ///
    /// Returns an error if the folder itself cannot be read.
    pub fn scan(folder: &Path) -> Result<Self> {
        if !folder.is_dir() {
            return Err(Error::Io(format!(
                "{} is not a directory",
                folder.display()
            )));
        }

        let mut svg_files = Vec::new();
        for entry in std::fs::read_dir(folder)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_svg(&path) {
                svg_files.push(path);
            }
        }
        svg_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut documents = Vec::with_capacity(svg_files.len());
        for path in svg_files {
            match SvgDocument::load(&path) {
                Ok(document) => documents.push(document),
                Err(e) => tracing::warn!("skipping {}: {}", path.display(), e),
            }
        }

        tracing::debug!(
            "found {} svg files in {}",
            documents.len(),
            folder.display()
        );

        Ok(Self {
            folder: folder.to_path_buf(),
            documents,
        })
    }

    /// Wraps documents that were loaded elsewhere.
    pub fn from_documents(folder: impl Into<PathBuf>, documents: Vec<SvgDocument>) -> Self {
        Self {
            folder: folder.into(),
            documents,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn documents(&self) -> &[SvgDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every color used across the set, with occurrence counts summed.
    pub fn colors(&self) -> ColorOccurrenceMap {
        let mut colors = ColorOccurrenceMap::new();
        for document in &self.documents {
            for (hex, count) in document.colors() {
                *colors.entry(hex.clone()).or_insert(0) += count;
            }
        }
        colors
    }

    /// Documents that use `hex`, in set order.
    pub fn documents_using(&self, hex: &str) -> Vec<&SvgDocument> {
        let hex = normalize_hex(hex);
        self.documents
            .iter()
            .filter(|d| d.colors().contains_key(&hex))
            .collect()
    }
}

/// Checks if a file has an `.svg` extension, ignoring case.
fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
