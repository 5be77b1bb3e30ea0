//! Configuration system tests
//!
//! Tests for config paths, loading from disk and command-line overrides.

use std::fs;

use clap::Parser;
use gridpad::cli::CliArgs;
use gridpad::config::GridConfig;
use gridpad::config_paths;
use gridpad::model::AppModel;
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("gridpad"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Loading Tests
// ========================================================================

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = GridConfig::load_from(&dir.path().join("nope.yaml"));

    assert_eq!(config, GridConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "row_numbers: true\nnew_column_label: Field\ncolumn_width: 12\n",
    )
    .unwrap();

    let config = GridConfig::load_from(&path);

    assert!(config.row_numbers);
    assert_eq!(config.new_column_label, "Field");
    assert_eq!(config.column_width, 12);
    assert_eq!(config.font_size, 14.0);
}

#[test]
fn test_load_from_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "row_numbers: [not, a, bool]\n").unwrap();

    assert_eq!(GridConfig::load_from(&path), GridConfig::default());
}

#[test]
fn test_invalid_theme_colour_falls_back() {
    let config = GridConfig::parse("theme:\n  cell_text: \"not-a-colour\"\n").unwrap();
    let defaults = GridConfig::default().grid_theme();

    assert_eq!(config.grid_theme().cell_text, defaults.cell_text);
}

// ========================================================================
// CLI Tests
// ========================================================================

#[test]
fn test_cli_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "font_size: 18\n").unwrap();

    let args = CliArgs::parse_from([
        "gridpad",
        "--config",
        path.to_str().unwrap(),
        "--font-size",
        "20",
        "--row-numbers",
    ]);
    let config = args.into_config();

    assert_eq!(config.font_size, 20.0);
    assert!(config.row_numbers);
}

#[test]
fn test_config_label_used_for_new_columns() {
    let config = GridConfig {
        new_column_label: "Field".to_string(),
        ..GridConfig::default()
    };
    let mut model = AppModel::new(800, 600, config);
    gridpad::update::update(
        &mut model,
        gridpad::Msg::Grid(gridpad::messages::GridMsg::AddColumn),
    );

    assert_eq!(model.grid.data.columns()[9].label, "Field 10");
}

#[test]
fn test_row_numbers_config_adds_read_only_column() {
    let config = GridConfig {
        row_numbers: true,
        ..GridConfig::default()
    };
    let model = AppModel::new(800, 600, config);
    let first = &model.grid.data.columns()[0];

    assert_eq!(first.label, "#");
    assert!(!first.is_editable());
    assert_eq!(model.grid.data.column_count(), 10);
    assert_eq!(model.grid.data.value(4, "index"), "5");
}
