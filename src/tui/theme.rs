use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;
use crate::ops::theme_pref::ThemeMode;
use crate::tui::list_renderer::Tone;

/// Color palette for one theme mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub indigo: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x11, 0x18, 0x27),
            text: Color::Rgb(0xD1, 0xD5, 0xDB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x81, 0x8C, 0xF8),
            dim: Color::Rgb(0x9C, 0xA3, 0xAF),
            red: Color::Rgb(0xFC, 0xA5, 0xA5),
            yellow: Color::Rgb(0xFD, 0xE0, 0x47),
            green: Color::Rgb(0x86, 0xEF, 0xAC),
            indigo: Color::Rgb(0xA5, 0xB4, 0xFC),
            selection_bg: Color::Rgb(0x37, 0x41, 0x51),
            search_match_bg: Color::Rgb(0x63, 0x66, 0xF1),
            search_match_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    pub fn light() -> Self {
        Theme {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xF9, 0xFA, 0xFB),
            text: Color::Rgb(0x37, 0x41, 0x51),
            text_bright: Color::Rgb(0x11, 0x18, 0x27),
            highlight: Color::Rgb(0x4F, 0x46, 0xE5),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            red: Color::Rgb(0x99, 0x1B, 0x1B),
            yellow: Color::Rgb(0x85, 0x4D, 0x0E),
            green: Color::Rgb(0x16, 0x65, 0x34),
            indigo: Color::Rgb(0x37, 0x30, 0xA3),
            selection_bg: Color::Rgb(0xE5, 0xE7, 0xEB),
            search_match_bg: Color::Rgb(0xC7, 0xD2, 0xFE),
            search_match_fg: Color::Rgb(0x11, 0x18, 0x27),
        }
    }

    /// Palette for `mode` with that mode's `[ui.colors_*]` overrides applied
    pub fn for_mode(mode: ThemeMode, ui: &UiConfig) -> Self {
        let (mut theme, overrides) = match mode {
            ThemeMode::Dark => (Theme::dark(), &ui.colors_dark),
            ThemeMode::Light => (Theme::light(), &ui.colors_light),
        };
        theme.apply_overrides(overrides);
        theme
    }

    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (key, value) in overrides {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut self.background,
                "text" => &mut self.text,
                "text_bright" => &mut self.text_bright,
                "highlight" => &mut self.highlight,
                "dim" => &mut self.dim,
                "red" => &mut self.red,
                "yellow" => &mut self.yellow,
                "green" => &mut self.green,
                "indigo" => &mut self.indigo,
                "selection_bg" => &mut self.selection_bg,
                "search_match_bg" => &mut self.search_match_bg,
                "search_match_fg" => &mut self.search_match_fg,
                _ => continue,
            };
            *slot = color;
        }
    }

    /// Badge color for a node tone
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Low => self.green,
            Tone::Medium => self.yellow,
            Tone::High => self.red,
            Tone::Math => self.indigo,
            Tone::Science => self.green,
            Tone::Neutral => self.dim,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#4F46E5"), Some(Color::Rgb(0x4F, 0x46, 0xE5)));
        assert_eq!(parse_hex_color("4F46E5"), None);
        assert_eq!(parse_hex_color("#4F46"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn mode_selects_palette() {
        let ui = UiConfig::default();
        assert_eq!(Theme::for_mode(ThemeMode::Dark, &ui), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light, &ui), Theme::light());
        assert_ne!(Theme::dark().background, Theme::light().background);
    }

    #[test]
    fn overrides_apply_per_mode() {
        let mut ui = UiConfig::default();
        ui.colors_dark.insert("highlight".into(), "#000000".into());
        ui.colors_dark.insert("nonsense".into(), "#111111".into());
        ui.colors_light.insert("background".into(), "not a color".into());

        let dark = Theme::for_mode(ThemeMode::Dark, &ui);
        assert_eq!(dark.highlight, Color::Rgb(0, 0, 0));
        assert_eq!(dark.background, Theme::dark().background);

        let light = Theme::for_mode(ThemeMode::Light, &ui);
        assert_eq!(light, Theme::light());
    }

    #[test]
    fn tone_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.tone_color(Tone::High), theme.red);
        assert_eq!(theme.tone_color(Tone::Math), theme.indigo);
        assert_eq!(theme.tone_color(Tone::Neutral), theme.dim);
    }
}
