// SPDX-License-Identifier: MPL-2.0
//! Hex color detection and literal color replacement in SVG source text.
//!
//! Detection looks for `#` followed by 3 to 6 hex digits and then a `;` or an
//! ASCII whitespace character. Replacement is a plain literal substitution: any
//! occurrence of a mapping key is rewritten, whether or not it sits inside a
//! color attribute.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Normalized (uppercase) hex color → number of occurrences.
pub type ColorOccurrenceMap = BTreeMap<String, usize>;

/// Old color text → replacement text.
pub type ColorMapping = BTreeMap<String, String>;

/// Normalized hex color → every spelling of it found in the source.
pub type ColorSpellings = BTreeMap<String, BTreeSet<String>>;

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(#[0-9A-Fa-f]{3,6})(?:;|(?-u:\s))").expect("color pattern is a valid regex")
});

/// Normalizes a hex color for use as a map key.
#[must_use]
pub fn normalize_hex(hex: &str) -> String {
    hex.trim().to_ascii_uppercase()
}

/// Counts the hex colors referenced in `text`, keyed by uppercase hex.
#[must_use]
pub fn extract_colors(text: &str) -> ColorOccurrenceMap {
    let mut colors = ColorOccurrenceMap::new();
    for caps in COLOR_PATTERN.captures_iter(text) {
        *colors.entry(normalize_hex(&caps[1])).or_insert(0) += 1;
    }
    colors
}

/// Same scan as [`extract_colors`], recording the raw text of each match.
#[must_use]
pub fn extract_color_spellings(text: &str) -> ColorSpellings {
    let mut spellings = ColorSpellings::new();
    for caps in COLOR_PATTERN.captures_iter(text) {
        let raw = &caps[1];
        spellings
            .entry(normalize_hex(raw))
            .or_default()
            .insert(raw.to_string());
    }
    spellings
}

/// Rewrites every literal occurrence of a mapping key in one left-to-right pass.
///
/// Keys are tried longest first so that a key never loses to its own prefix.
/// Empty keys are ignored. With nothing to replace the text is returned as is.
#[must_use]
pub fn apply_color_map(text: &str, mapping: &ColorMapping) -> String {
    let mut keys: Vec<&str> = mapping
        .keys()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .collect();
    if keys.is_empty() {
        return text.to_string();
    }
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let pattern = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("color mapping with {} keys not applied: {}", keys.len(), e);
            return text.to_string();
        }
    };

    re.replace_all(text, |caps: &regex::Captures<'_>| {
        mapping
            .get(&caps[0])
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}
