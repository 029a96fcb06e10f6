use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashConfig {
    /// Seed the stores with the sample tasks and notes on startup
    #[serde(default = "default_true")]
    pub sample_data: bool,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for DashConfig {
    fn default() -> Self {
        DashConfig {
            sample_data: true,
            ui: UiConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// What submitting the form does after an edit action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Replace the edited item in place
    #[default]
    Update,
    /// Only pre-fill the form; submit appends a new item
    Create,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub edit_mode: EditMode,
    /// Override for the terminal's light/dark preference ("light" or "dark")
    #[serde(default)]
    pub system_theme: Option<String>,
    /// Hex color overrides for the dark palette
    #[serde(default)]
    pub colors_dark: HashMap<String, String>,
    /// Hex color overrides for the light palette
    #[serde(default)]
    pub colors_light: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            edit_mode: EditMode::default(),
            system_theme: None,
            colors_dark: HashMap::new(),
            colors_light: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: DashConfig = toml::from_str("").unwrap();
        assert!(config.sample_data);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.edit_mode, EditMode::Update);
        assert!(config.ui.system_theme.is_none());
    }

    #[test]
    fn parses_ui_section() {
        let config: DashConfig = toml::from_str(
            r##"
sample_data = false

[ui]
edit_mode = "create"
system_theme = "dark"

[ui.colors_dark]
highlight = "#112233"
"##,
        )
        .unwrap();
        assert!(!config.sample_data);
        assert_eq!(config.ui.edit_mode, EditMode::Create);
        assert_eq!(config.ui.system_theme.as_deref(), Some("dark"));
        assert_eq!(
            config.ui.colors_dark.get("highlight").map(String::as_str),
            Some("#112233")
        );
    }
}
