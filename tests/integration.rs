// SPDX-License-Identifier: MPL-2.0
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use svg_recolor::app::App;
use svg_recolor::cli;
use svg_recolor::config::{self, Config, Panel};
use svg_recolor::directory_scanner::IconSet;
use svg_recolor::export;
use svg_recolor::swap_table::SwapTable;
use tempfile::tempdir;

const CHECK_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16">
  <path d="M2 8 L6 12 L14 4" style="fill:none;stroke:#333333;stroke-width:2"/>
  <circle cx="8" cy="8" r="2" style="fill:#e01b24;"/>
</svg>"##;

const CROSS_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16">
  <path d="M3 3 L13 13 M13 3 L3 13" style="stroke:#333333; stroke-width:2"/>
</svg>"##;

fn write_icon_folder(dir: &Path) {
    fs::create_dir_all(dir).expect("create icon folder");
    fs::write(dir.join("check.svg"), CHECK_ICON).expect("write check");
    fs::write(dir.join("cross.SVG"), CROSS_ICON).expect("write cross");
    fs::write(dir.join("README.txt"), "#333333 not an icon").expect("write readme");
}

#[test]
fn scan_swap_and_export_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let input = dir.path().join("icons");
    let output = dir.path().join("recolored");
    write_icon_folder(&input);

    let set = IconSet::scan(&input).expect("scan icons");
    assert_eq!(set.len(), 2);

    let colors = set.colors();
    assert_eq!(colors.get("#333333"), Some(&2));
    assert_eq!(colors.get("#E01B24"), Some(&1));

    let mut table = SwapTable::from_colors(&colors);
    table.set_swap("#333333", "#EEEEEE").expect("swap dark gray");
    table.set_swap("#E01B24", "#2EC27E").expect("swap red");

    let report = export::write_all(&set, &table.to_mapping(), &output).expect("export");
    assert_eq!(report.written, 2);
    assert!(report.failed.is_empty());

    let check = fs::read_to_string(output.join("check.svg")).expect("check written");
    assert!(check.contains("stroke:#EEEEEE;"));
    assert!(check.contains("fill:#2EC27E;"));
    assert!(!check.contains("#e01b24"));

    let cross = fs::read_to_string(output.join("cross.SVG")).expect("cross written");
    assert!(cross.contains("stroke:#EEEEEE;"));
    assert!(!output.join("README.txt").exists());

    // The recolored folder scans back to exactly the new colors.
    let rescanned = IconSet::scan(&output).expect("scan output");
    let new_colors: Vec<String> = rescanned.colors().into_keys().collect();
    assert_eq!(new_colors, vec!["#2EC27E", "#EEEEEE"]);
}

#[test]
fn saved_swaps_survive_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.swaps.insert("#333333".into(), "#EEEEEE".into());
    config
        .add_custom_background(Panel::Input, "#241F31")
        .expect("valid background");
    config::save_to_path(&config, &config_path).expect("save config");

    let loaded = config::load_from_path(&config_path).expect("load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.background_hex(Panel::Input), "#241F31");

    let input = dir.path().join("icons");
    write_icon_folder(&input);
    let set = IconSet::scan(&input).expect("scan icons");
    let mut table = SwapTable::from_colors(&set.colors());
    table.restore(&loaded.swaps);
    assert_eq!(table.to_mapping(), loaded.swaps);
}

#[test]
fn command_line_drives_the_whole_workflow() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let input = dir.path().join("icons");
    let output = dir.path().join("out");
    let config_dir = dir.path().join("config");
    write_icon_folder(&input);

    let cfg = config_dir.display().to_string();
    let run = |words: &[&str]| -> svg_recolor::error::Result<String> {
        let mut all = vec!["--config-dir", cfg.as_str()];
        all.extend_from_slice(words);
        let parsed = cli::parse(pico_args::Arguments::from_vec(
            all.into_iter().map(OsString::from).collect(),
        ))?;
        let mut app = App::new(parsed.options.config_dir.clone());
        let mut out = Vec::new();
        app.run(parsed.command, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    };
    let input_arg = input.display().to_string();
    let output_arg = output.display().to_string();

    let scanned = run(&["scan", "--input", input_arg.as_str()]).expect("scan");
    assert!(scanned.contains("Found 2 .svg files"));

    let swapped = run(&["swap", "#333333", "#eeeeee"]).expect("swap");
    assert_eq!(swapped.trim(), "#333333 -> #EEEEEE (2 files)");

    // Only colors detected in the icons can be swapped.
    assert!(run(&["swap", "#123456", "#EEEEEE"]).is_err());

    let applied = run(&["apply", "--output", output_arg.as_str()]).expect("apply");
    assert!(applied.starts_with("Created 2 .svg's"));
    let check = fs::read_to_string(output.join("check.svg")).expect("check written");
    assert!(check.contains("stroke:#EEEEEE;"));
    assert!(check.contains("fill:#e01b24;"));

    let listed = run(&["swap", "--list"]).expect("list");
    assert_eq!(listed.trim(), "#333333 -> #EEEEEE");

    let contrast = run(&["contrast", "#EEEEEE", "#FFFFFF"]).expect("contrast");
    assert!(contrast.contains("poor"));
}
