//! Grid configuration
//!
//! Read from `~/.config/gridpad/config.yaml` (or a path given on the command
//! line). Every field is optional; anything missing or invalid falls back to
//! the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::{GridTheme, ThemeData};

/// User preferences for the grid window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// TTF font to render with. Common system fonts are probed when unset.
    pub font_path: Option<PathBuf>,
    /// Font size in logical pixels
    pub font_size: f32,
    /// Column width in characters
    pub column_width: usize,
    /// Show the read-only row-number column
    pub row_numbers: bool,
    /// Added columns are labelled "{new_column_label} {n}"
    pub new_column_label: String,
    /// Colour overrides
    pub theme: ThemeData,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: 14.0,
            column_width: 22,
            row_numbers: false,
            new_column_label: "Column".to_string(),
            theme: ThemeData::default(),
        }
    }
}

impl GridConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML config text and sanitize out-of-range values
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.font_size.is_finite() || self.font_size < 6.0 {
            tracing::warn!("font_size {} too small, using default", self.font_size);
            self.font_size = defaults.font_size;
        }
        self.column_width = self.column_width.clamp(4, 80);
        self
    }

    /// Resolved colour table
    pub fn grid_theme(&self) -> GridTheme {
        GridTheme::from_data(&self.theme)
    }

    /// Label for the column that will become column number `count`
    pub fn new_column_label(&self, count: usize) -> String {
        format!("{} {}", self.new_column_label, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial() {
        let config = GridConfig::parse("row_numbers: true\ncolumn_width: 30\n").unwrap();

        assert!(config.row_numbers);
        assert_eq!(config.column_width, 30);
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.new_column_label, "Column");
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(GridConfig::parse("").unwrap(), GridConfig::default());
        assert_eq!(GridConfig::parse("  \n").unwrap(), GridConfig::default());
    }

    #[test]
    fn test_parse_sanitizes() {
        let config = GridConfig::parse("font_size: 1.0\ncolumn_width: 500\n").unwrap();
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.column_width, 80);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(GridConfig::parse("column_width: [oops").is_err());
    }

    #[test]
    fn test_parse_theme_section() {
        let config = GridConfig::parse("theme:\n  grid_line: \"#101010\"\n").unwrap();
        assert_eq!(config.theme.grid_line.as_deref(), Some("#101010"));
        assert_eq!(
            config.grid_theme().grid_line,
            crate::theme::Color::rgb(0x10, 0x10, 0x10)
        );
    }

    #[test]
    fn test_new_column_label() {
        let config = GridConfig::default();
        assert_eq!(config.new_column_label(10), "Column 10");
    }
}
