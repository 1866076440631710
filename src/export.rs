// SPDX-License-Identifier: MPL-2.0
//! Writing recolored icons to the output folder.
//!
//! Every document of an [`IconSet`] is written under the output folder at the
//! same relative path it had in the input folder. Existing files are
//! overwritten. A file that fails to write is recorded in the
//! [`ExportReport`] and the batch carries on.

use crate::directory_scanner::IconSet;
use crate::error::{ExportBlocker, Result};
use crate::svg::ColorMapping;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a batch export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub output: PathBuf,
    pub written: usize,
    /// Files that could not be written, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl ExportReport {
    /// One-line status message.
    pub fn summary(&self) -> String {
        if self.written > 0 {
            format!("Created {} .svg's in {}", self.written, self.output.display())
        } else {
            "No files were created".to_string()
        }
    }
}

/// Checks that an export can start.
///
/// Returns the first problem found, checking in order: input folder set,
/// input has SVGs, output folder set, output differs from input, output is
/// writable. An output folder that does not exist yet is fine; it is created
/// on export.
pub fn check_ready(
    input: Option<&Path>,
    output: Option<&Path>,
    svg_count: usize,
) -> std::result::Result<(), ExportBlocker> {
    let input = input.ok_or(ExportBlocker::NoInputFolder)?;
    if svg_count == 0 {
        return Err(ExportBlocker::NoSvgFiles);
    }
    let output = output.ok_or(ExportBlocker::NoOutputFolder)?;
    if same_folder(input, output) {
        return Err(ExportBlocker::SameFolder);
    }
    if let Ok(metadata) = fs::metadata(output) {
        if !metadata.is_dir() || metadata.permissions().readonly() {
            return Err(ExportBlocker::OutputNotWritable);
        }
    }
    Ok(())
}

fn same_folder(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Where `document_path` lands under `output`.
fn output_path_for(set: &IconSet, document_path: &Path, output: &Path) -> PathBuf {
    match document_path.strip_prefix(set.folder()) {
        Ok(relative) => output.join(relative),
        Err(_) => output.join(document_path.file_name().unwrap_or_default()),
    }
}

/// Writes every document in `set` with `mapping` applied.
///
/// # Errors
///
/// Returns [`crate::error::Error::Export`] if [`check_ready`] fails. Errors on
/// individual files are reported in [`ExportReport::failed`] instead.
pub fn write_all(set: &IconSet, mapping: &ColorMapping, output: &Path) -> Result<ExportReport> {
    check_ready(Some(set.folder()), Some(output), set.len())?;

    let mut report = ExportReport {
        output: output.to_path_buf(),
        written: 0,
        failed: Vec::new(),
    };

    for document in set.documents() {
        let target = output_path_for(set, document.path(), output);
        let result = target
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(&target, document.mapped_content(mapping)));

        match result {
            Ok(()) => {
                tracing::debug!("wrote {}", target.display());
                report.written += 1;
            }
            Err(e) => {
                tracing::warn!("failed to write {}: {}", target.display(), e);
                report.failed.push((target, e.to_string()));
            }
        }
    }

    tracing::info!("{}", report.summary());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" style="fill:#FF0000;"/></svg>"#;

    fn write_icons(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), ICON).expect("failed to write icon");
        }
    }

    fn red_to_blue() -> ColorMapping {
        let mut mapping = ColorMapping::new();
        mapping.insert("#FF0000".into(), "#0000FF".into());
        mapping
    }

    #[test]
    fn check_ready_reports_first_blocker_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let input = temp_dir.path().join("in");
        let output = temp_dir.path().join("out");
        fs::create_dir(&input).expect("create input");

        assert_eq!(
            check_ready(None, None, 0),
            Err(ExportBlocker::NoInputFolder)
        );
        assert_eq!(
            check_ready(Some(&input), None, 0),
            Err(ExportBlocker::NoSvgFiles)
        );
        assert_eq!(
            check_ready(Some(&input), None, 3),
            Err(ExportBlocker::NoOutputFolder)
        );
        assert_eq!(
            check_ready(Some(&input), Some(&input), 3),
            Err(ExportBlocker::SameFolder)
        );
        assert_eq!(check_ready(Some(&input), Some(&output), 3), Ok(()));
    }

    #[test]
    fn check_ready_sees_through_equivalent_paths() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let input = temp_dir.path().join("in");
        fs::create_dir(&input).expect("create input");
        let dotted = input.join(".");

        assert_eq!(
            check_ready(Some(&input), Some(&dotted), 1),
            Err(ExportBlocker::SameFolder)
        );
    }

    #[test]
    fn check_ready_rejects_read_only_or_file_output() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let input = temp_dir.path().join("in");
        fs::create_dir(&input).expect("create input");

        let file_output = temp_dir.path().join("out.txt");
        fs::write(&file_output, "x").expect("write file");
        assert_eq!(
            check_ready(Some(&input), Some(&file_output), 1),
            Err(ExportBlocker::OutputNotWritable)
        );

        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).expect("create locked");
        let mut permissions = fs::metadata(&locked).expect("metadata").permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&locked, permissions.clone()).expect("lock");

        let result = check_ready(Some(&input), Some(&locked), 1);

        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        fs::set_permissions(&locked, permissions).expect("unlock");
        assert_eq!(result, Err(ExportBlocker::OutputNotWritable));
    }

    #[test]
    fn write_all_mirrors_files_with_mapping_applied() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let input = temp_dir.path().join("in");
        let output = temp_dir.path().join("nested").join("out");
        fs::create_dir(&input).expect("create input");
        write_icons(&input, &["a.svg", "b.svg"]);

        let set = IconSet::scan(&input).expect("scan");
        let report = write_all(&set, &red_to_blue(), &output).expect("export");

        assert_eq!(report.written, 2);
        assert!(report.failed.is_empty());
        assert_eq!(
            report.summary(),
            format!("Created 2 .svg's in {}", output.display())
        );
        for name in ["a.svg", "b.svg"] {
            let written = fs::read_to_string(output.join(name)).expect("output exists");
            assert!(written.contains("fill:#0000FF;"));
            assert!(!written.contains("#FF0000"));
        }
        // Input is untouched.
        let original = fs::read_to_string(input.join("a.svg")).expect("input exists");
        assert_eq!(original, ICON);
    }

    #[test]
    fn write_all_overwrites_existing_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let input = temp_dir.path().join("in");
        let output = temp_dir.path().join("out");
        fs::create_dir(&input).expect("create input");
        fs::create_dir(&output).expect("create output");
        write_icons(&input, &["a.svg"]);
        fs::write(output.join("a.svg"), "stale").expect("write stale");

        let set = IconSet::scan(&input).expect("scan");
        write_all(&set, &ColorMapping::new(), &output).expect("export");

        assert_eq!(
            fs::read_to_string(output.join("a.svg")).expect("read"),
            ICON
        );
    }

    #[test]
    fn write_all_counts_failures_without_aborting() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let input = temp_dir.path().join("in");
        let output = temp_dir.path().join("out");
        fs::create_dir(&input).expect("create input");
        write_icons(&input, &["a.svg", "b.svg"]);
        // A directory where a file should go makes that write fail.
        fs::create_dir_all(output.join("a.svg")).expect("create blocker");

        let set = IconSet::scan(&input).expect("scan");
        let report = write_all(&set, &red_to_blue(), &output).expect("export");

        assert_eq!(report.written, 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, output.join("a.svg"));
    }

    #[test]
    fn write_all_refuses_blocked_export() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let input = temp_dir.path().join("in");
        fs::create_dir(&input).expect("create input");

        let empty = IconSet::scan(&input).expect("scan");
        match write_all(&empty, &ColorMapping::new(), &temp_dir.path().join("out")) {
            Err(Error::Export(ExportBlocker::NoSvgFiles)) => {}
            other => panic!("expected NoSvgFiles, got {other:?}"),
        }
    }

    #[test]
    fn summary_without_files() {
        let report = ExportReport {
            output: PathBuf::from("out"),
            written: 0,
            failed: Vec::new(),
        };
        assert_eq!(report.summary(), "No files were created");
    }
}
