//! Colour table for the grid window
//!
//! Defaults mirror the light page style of the job tracker. Any colour can be
//! overridden from the `theme:` section of `config.yaml` with "#RRGGBB" or
//! "#RRGGBBAA" strings.

use serde::{Deserialize, Serialize};

/// An RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Colour overrides as written in YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeData {
    pub background: Option<String>,
    pub title: Option<String>,
    pub toolbar_text: Option<String>,
    pub toolbar_badge: Option<String>,
    pub toolbar_primary: Option<String>,
    pub grid_background: Option<String>,
    pub grid_line: Option<String>,
    pub header_background: Option<String>,
    pub header_text: Option<String>,
    pub cell_text: Option<String>,
    pub active_cell_border: Option<String>,
    pub editing_background: Option<String>,
    pub read_only_text: Option<String>,
    pub status_bar_background: Option<String>,
    pub status_bar_text: Option<String>,
}

/// Resolved colours used by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct GridTheme {
    pub background: Color,
    pub title: Color,
    pub toolbar_text: Color,
    pub toolbar_badge: Color,
    pub toolbar_primary: Color,
    pub grid_background: Color,
    pub grid_line: Color,
    pub header_background: Color,
    pub header_text: Color,
    pub cell_text: Color,
    pub active_cell_border: Color,
    pub editing_background: Color,
    pub read_only_text: Color,
    pub status_bar_background: Color,
    pub status_bar_text: Color,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xF9, 0xFA, 0xFB),
            title: Color::rgb(0x1F, 0x29, 0x37),
            toolbar_text: Color::rgb(0x37, 0x41, 0x51),
            toolbar_badge: Color::rgb(0x3B, 0x82, 0xF6),
            toolbar_primary: Color::rgb(0x15, 0x80, 0x3D),
            grid_background: Color::rgb(0xFF, 0xFF, 0xFF),
            grid_line: Color::rgb(0xE5, 0xE7, 0xEB),
            header_background: Color::rgb(0xF3, 0xF4, 0xF6),
            header_text: Color::rgb(0x11, 0x18, 0x27),
            cell_text: Color::rgb(0x1F, 0x29, 0x37),
            active_cell_border: Color::rgb(0x25, 0x63, 0xEB),
            editing_background: Color::rgb(0xEF, 0xF6, 0xFF),
            read_only_text: Color::rgb(0x9C, 0xA3, 0xAF),
            status_bar_background: Color::rgb(0xE5, 0xE7, 0xEB),
            status_bar_text: Color::rgb(0x37, 0x41, 0x51),
        }
    }
}

impl GridTheme {
    /// Apply YAML overrides on top of the defaults
    ///
    /// Invalid colours are logged and keep their default.
    pub fn from_data(data: &ThemeData) -> Self {
        let mut theme = Self::default();

        let overrides: [(&str, &Option<String>, &mut Color); 15] = [
            ("background", &data.background, &mut theme.background),
            ("title", &data.title, &mut theme.title),
            ("toolbar_text", &data.toolbar_text, &mut theme.toolbar_text),
            ("toolbar_badge", &data.toolbar_badge, &mut theme.toolbar_badge),
            ("toolbar_primary", &data.toolbar_primary, &mut theme.toolbar_primary),
            ("grid_background", &data.grid_background, &mut theme.grid_background),
            ("grid_line", &data.grid_line, &mut theme.grid_line),
            ("header_background", &data.header_background, &mut theme.header_background),
            ("header_text", &data.header_text, &mut theme.header_text),
            ("cell_text", &data.cell_text, &mut theme.cell_text),
            ("active_cell_border", &data.active_cell_border, &mut theme.active_cell_border),
            ("editing_background", &data.editing_background, &mut theme.editing_background),
            ("read_only_text", &data.read_only_text, &mut theme.read_only_text),
            (
                "status_bar_background",
                &data.status_bar_background,
                &mut theme.status_bar_background,
            ),
            ("status_bar_text", &data.status_bar_text, &mut theme.status_bar_text),
        ];

        for (name, value, slot) in overrides {
            let Some(hex) = value else { continue };
            match Color::from_hex(hex) {
                Ok(color) => *slot = color,
                Err(e) => tracing::warn!("Ignoring theme colour {}: {}", name, e),
            }
        }

        theme
    }
}
