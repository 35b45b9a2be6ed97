use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin Mocha
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(148, 226, 213),
        }
    }
}

// Wrapper for the [theme] table form
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn get_theme_path() -> std::path::PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("segno");
    path.push("theme.toml");
    path
}

/// Load the user theme if one exists, otherwise the default palette.
/// Accepts both a nested `[theme]` table and a flat file.
pub fn load_current_theme() -> Theme {
    let path = get_theme_path();
    if path.exists() {
        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(wrapper) = toml::from_str::<ThemeFile>(&content) {
                return wrapper.theme;
            }
            if let Ok(theme) = toml::from_str::<Theme>(&content) {
                return theme;
            }
        }
    }
    Theme::default()
}
