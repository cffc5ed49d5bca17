use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Habits marked as highlighted
    pub highlight: Color,
    /// Check marks and the streak counter
    pub checked: Color,
    /// Plant art, keys in hints, form labels
    pub accent: Color,
    pub selection_bg: Color,
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x1D, 0x17),
            text: Color::Rgb(0xD8, 0xD4, 0xC4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x80, 0x7C, 0x6E),
            highlight: Color::Rgb(0xFF, 0xFA, 0xB3),
            checked: Color::Rgb(0x8F, 0xD6, 0x7A),
            accent: Color::Rgb(0x5F, 0xB8, 0x5A),
            selection_bg: Color::Rgb(0x33, 0x3A, 0x2C),
            red: Color::Rgb(0xFF, 0x55, 0x55),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring color {} = {:?}: not a #RRGGBB value", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "highlight" => theme.highlight = color,
                "checked" => theme.checked = color,
                "accent" => theme.accent = color,
                "selection_bg" => theme.selection_bg = color,
                "red" => theme.red = color,
                other => log::warn!("ignoring unknown color key {}", other),
            }
        }

        theme
    }
}
