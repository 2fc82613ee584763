use std::collections::HashMap;

use ratatui::style::Color;

/// Color theme for the panel
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub cyan: Color,
    pub purple: Color,
    pub red: Color,
    /// Per-tag colors (keys without the `#`)
    pub tag_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("next".into(), Color::Rgb(0x44, 0xFF, 0x88));
        tag_colors.insert("waiting".into(), Color::Rgb(0xFF, 0xD7, 0x00));
        tag_colors.insert("someday".into(), Color::Rgb(0x44, 0x88, 0xFF));
        tag_colors.insert("project".into(), Color::Rgb(0xCC, 0x66, 0xFF));
        tag_colors.insert("context".into(), Color::Rgb(0x44, 0xDD, 0xFF));

        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6C, 0x6C, 0x80),
            highlight: Color::Rgb(0x3A, 0x3A, 0x55),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            blue: Color::Rgb(0x44, 0x88, 0xFF),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            tag_colors,
        }
    }
}

impl Theme {
    /// Color for an inline tag. Accepts the tag with or without its `#`.
    pub fn tag_color(&self, tag: &str) -> Color {
        let key = tag.strip_prefix('#').unwrap_or(tag);
        self.tag_colors.get(key).copied().unwrap_or(self.cyan)
    }
}
