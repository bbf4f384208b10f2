//! Application Configuration
//!
//! Compiled-in defaults, optionally overridden by the bundled
//! `assets/config.json`. Missing keys keep their defaults.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::logging::LogConfig;
use crate::models::ViewMode;

const BUNDLED_CONFIG: &str = include_str!("../assets/config.json");

/// Characters escaped inside one icon path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL prefix for item icons
    pub asset_root: String,
    pub icon_extension: String,
    /// localStorage key for the theme preference
    pub theme_storage_key: String,
    pub default_view_mode: ViewMode,
    pub min_tier: i32,
    pub max_tier: i32,
    /// tracing level name
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_root: "/assets".to_string(),
            icon_extension: "webp".to_string(),
            theme_storage_key: "theme-preference".to_string(),
            default_view_mode: ViewMode::Grid,
            min_tier: 1,
            max_tier: 10,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bundled config, or defaults if it does not parse
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                web_sys::console::warn_1(&format!("[CONFIG] Using defaults: {err}").into());
                Self::default()
            }
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig::from_level_name(&self.log_level)
    }

    /// `{asset_root}/{icon}.{ext}` with each path segment percent-encoded
    pub fn icon_url(&self, icon: &str) -> String {
        let path: Vec<String> = icon
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect();
        format!(
            "{}/{}.{}",
            self.asset_root.trim_end_matches('/'),
            path.join("/"),
            self.icon_extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        assert!(AppConfig::from_json(BUNDLED_CONFIG).is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "default_view_mode": "list", "max_tier": 6 }"#)
            .expect("config");
        assert_eq!(config.default_view_mode, ViewMode::List);
        assert_eq!(config.max_tier, 6);
        assert_eq!(config.asset_root, "/assets");
    }

    #[test]
    fn test_icon_url_encodes_segments() {
        let config = AppConfig::default();
        assert_eq!(config.icon_url("Items/Iron Ore"), "/assets/Items/Iron%20Ore.webp");
        assert_eq!(config.icon_url("Other/Cargo#1"), "/assets/Other/Cargo%231.webp");
    }

    #[test]
    fn test_icon_url_trims_slashes() {
        let config = AppConfig {
            asset_root: "https://cdn.example/icons/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.icon_url("/Items/Plank"), "https://cdn.example/icons/Items/Plank.webp");
    }
}
