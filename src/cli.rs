//! Command-line argument parsing
//!
//! Flags override the matching fields of `config.yaml`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;

/// An editable job-request grid
#[derive(Parser, Debug)]
#[command(name = "gridpad", version, about = "An editable job-request grid")]
pub struct CliArgs {
    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TTF font to render with
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Font size in logical pixels
    #[arg(long, value_name = "N")]
    pub font_size: Option<f32>,

    /// Show the read-only row-number column
    #[arg(long)]
    pub row_numbers: bool,
}

impl CliArgs {
    /// Load the config file and apply command-line overrides
    pub fn into_config(self) -> GridConfig {
        let mut config = match &self.config {
            Some(path) => GridConfig::load_from(path),
            None => GridConfig::load(),
        };
        self.apply_to(&mut config);
        config
    }

    /// Apply command-line overrides to an already loaded config
    pub fn apply_to(&self, config: &mut GridConfig) {
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if let Some(size) = self.font_size.filter(|s| s.is_finite() && *s >= 6.0) {
            config.font_size = size;
        }
        if self.row_numbers {
            config.row_numbers = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from(["gridpad", "--font-size", "18", "--row-numbers"]);
        assert_eq!(args.font_size, Some(18.0));
        assert!(args.row_numbers);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_apply_overrides() {
        let args = CliArgs::parse_from(["gridpad", "--font", "/tmp/mono.ttf", "--font-size", "2"]);
        let mut config = GridConfig::default();
        args.apply_to(&mut config);

        assert_eq!(config.font_path, Some(PathBuf::from("/tmp/mono.ttf")));
        // Rejected: below the minimum size
        assert_eq!(config.font_size, 14.0);
        assert!(!config.row_numbers);
    }
}
