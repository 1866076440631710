// SPDX-License-Identifier: MPL-2.0
//! Old → new color swaps for the colors detected in an icon set.
//!
//! Each row pairs a detected color with an optional replacement. The table
//! can report how each side of a swap contrasts with its background and
//! turns the chosen swaps into a [`ColorMapping`] for the substitution step.

use crate::color::{classify_contrast, contrast_ratio, Color, ContrastRating};
use crate::error::{Error, Result};
use crate::svg::{normalize_hex, ColorMapping, ColorOccurrenceMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRow {
    /// Detected color, uppercase hex.
    pub old: String,
    /// Replacement color, uppercase hex. `None` leaves the color as is.
    pub new: Option<String>,
    /// Occurrences across the scanned files.
    pub occurrences: usize,
}

impl SwapRow {
    /// The color this row produces in the output.
    pub fn effective(&self) -> &str {
        self.new.as_deref().unwrap_or(&self.old)
    }
}

/// Contrast of a swap row against the input and output backgrounds.
///
/// A side is `None` when its hex text is not a parseable color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowContrast {
    pub old: Option<f64>,
    pub new: Option<f64>,
}

impl RowContrast {
    pub fn old_rating(&self) -> Option<ContrastRating> {
        self.old.map(classify_contrast)
    }

    pub fn new_rating(&self) -> Option<ContrastRating> {
        self.new.map(classify_contrast)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapTable {
    rows: Vec<SwapRow>,
}

impl SwapTable {
    /// One unswapped row per color, sorted by hex.
    pub fn from_colors(colors: &ColorOccurrenceMap) -> Self {
        let rows = colors
            .iter()
            .map(|(hex, &occurrences)| SwapRow {
                old: normalize_hex(hex),
                new: None,
                occurrences,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[SwapRow] {
        &self.rows
    }

    pub fn row(&self, old: &str) -> Option<&SwapRow> {
        let old = normalize_hex(old);
        self.rows.iter().find(|r| r.old == old)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sets the replacement for `old`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorFormat`] if `new` is not a color and
    /// [`Error::Usage`] if `old` is not in the table.
    pub fn set_swap(&mut self, old: &str, new: &str) -> Result<()> {
        Color::from_hex(new)?;
        let key = normalize_hex(old);
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.old == key)
            .ok_or_else(|| Error::Usage(format!("{} is not used by any icon", old.trim())))?;
        row.new = Some(normalize_hex(new));
        Ok(())
    }

    /// Re-applies previously saved swaps. Keys without a row and values that
    /// are not colors are ignored.
    pub fn restore(&mut self, saved: &ColorMapping) {
        for (old, new) in saved {
            if let Err(e) = self.set_swap(old, new) {
                tracing::debug!("saved swap {} -> {} not restored: {}", old, new, e);
            }
        }
    }

    /// The swaps that are set, ready for substitution.
    pub fn to_mapping(&self) -> ColorMapping {
        self.rows
            .iter()
            .filter_map(|r| r.new.as_ref().map(|new| (r.old.clone(), new.clone())))
            .collect()
    }

    /// Contrast of the old color against `input_background` and of the
    /// effective new color against `output_background`.
    pub fn row_contrast(
        row: &SwapRow,
        input_background: Color,
        output_background: Color,
    ) -> RowContrast {
        let against = |hex: &str, background: Color| {
            Color::from_hex(hex)
                .ok()
                .map(|c| contrast_ratio(c, background))
        };
        RowContrast {
            old: against(&row.old, input_background),
            new: against(row.effective(), output_background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn table() -> SwapTable {
        let mut colors = ColorOccurrenceMap::new();
        colors.insert("#FF0000".into(), 3);
        colors.insert("#000000".into(), 1);
        colors.insert("#1234".into(), 2);
        SwapTable::from_colors(&colors)
    }

    #[test]
    fn rows_start_unswapped_and_sorted() {
        let table = table();
        let olds: Vec<&str> = table.rows().iter().map(|r| r.old.as_str()).collect();
        assert_eq!(olds, vec!["#000000", "#1234", "#FF0000"]);
        assert!(table.rows().iter().all(|r| r.new.is_none()));
        assert_eq!(table.row("#ff0000").map(|r| r.occurrences), Some(3));
        assert!(table.to_mapping().is_empty());
    }

    #[test]
    fn set_swap_normalizes_and_appears_in_mapping() {
        let mut table = table();
        table.set_swap("#ff0000", "#00aa00").expect("valid swap");
        let mapping = table.to_mapping();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["#FF0000"], "#00AA00");
        assert_eq!(table.row("#FF0000").map(SwapRow::effective), Some("#00AA00"));
    }

    #[test]
    fn set_swap_rejects_bad_color_and_unknown_row() {
        let mut table = table();
        assert!(matches!(
            table.set_swap("#FF0000", "green"),
            Err(Error::InvalidColorFormat(_))
        ));
        assert!(matches!(
            table.set_swap("#ABCDEF", "#000000"),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn restore_applies_matching_saved_swaps_only() {
        let mut table = table();
        let mut saved = ColorMapping::new();
        saved.insert("#FF0000".into(), "#0000FF".into());
        saved.insert("#ABCDEF".into(), "#000000".into());
        saved.insert("#000000".into(), "nope".into());

        table.restore(&saved);
        let mapping = table.to_mapping();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["#FF0000"], "#0000FF");
    }

    #[test]
    fn row_contrast_uses_effective_color_per_side() {
        let mut table = table();
        table.set_swap("#000000", "#FFFFFF").expect("valid swap");
        let row = table.row("#000000").expect("row exists").clone();

        let contrast = SwapTable::row_contrast(&row, Color::WHITE, Color::WHITE);
        assert_abs_diff_eq!(contrast.old.expect("old ratio"), 21.0, epsilon = 1e-9);
        assert_abs_diff_eq!(contrast.new.expect("new ratio"), 1.0, epsilon = 1e-9);
        assert_eq!(contrast.old_rating(), Some(ContrastRating::Good));
        assert_eq!(contrast.new_rating(), Some(ContrastRating::Poor));
    }

    #[test]
    fn row_contrast_is_none_for_unparseable_hex() {
        let table = table();
        let row = table.row("#1234").expect("row exists");
        let contrast = SwapTable::row_contrast(row, Color::BLACK, Color::WHITE);
        assert_eq!(contrast.old, None);
        assert_eq!(contrast.new, None);
    }
}
