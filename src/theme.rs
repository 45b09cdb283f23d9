//! Card colors, optionally read from a kitty-style color file
//! (`key #rrggbb` per line).

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Color,   // Card border and title
    pub label: Color,    // `name`, `age`, `city`
    pub value: Color,    // Field values
    pub text_dim: Color, // Separator and footer text
    pub accent: Color,   // Key hints
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb(88, 91, 112),
            label: Color::Rgb(243, 139, 168),
            value: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            accent: Color::Rgb(250, 179, 135),
        }
    }
}

impl Theme {
    /// Load colors from `path`, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match fs::read_to_string(path) {
            Ok(content) => Self::from_kitty_conf(&content),
            Err(e) => {
                tracing::warn!("Could not read theme {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Missing keys keep their default color.
    pub fn from_kitty_conf(content: &str) -> Self {
        let colors = parse_kitty_conf(content);
        let fallback = Self::default();

        let pick = |keys: &[&str], default: Color| {
            keys.iter()
                .find_map(|k| colors.get(*k))
                .copied()
                .unwrap_or(default)
        };

        Self {
            border: pick(&["inactive_border_color", "color8"], fallback.border),
            label: pick(&["color1", "color9"], fallback.label),
            value: pick(&["foreground"], fallback.value),
            text_dim: pick(&["color8"], fallback.text_dim),
            accent: pick(&["color2", "color10"], fallback.accent),
        }
    }
}

fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
    let mut colors = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(char::is_whitespace) {
            if let Some(color) = parse_hex_color(value) {
                colors.insert(key.trim().to_string(), color);
            }
        }
    }

    colors
}

/// `#RRGGBB` or `#RGB`
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    match s.len() {
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
