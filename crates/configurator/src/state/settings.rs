//! Application settings

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::{PriceTable, UnitDimensions};

use crate::i18n::{t_in, Lang};

/// Viewport settings consumed by the rendering adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Highlight color RGB for a selected unit
    pub unit_highlight: [u8; 3],
    /// Highlight color RGB for a selected wall or roof
    pub face_highlight: [u8; 3],
    /// Show the environment map and ground
    pub show_environment: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            unit_highlight: [0x33, 0x99, 0xff],
            face_highlight: [0xff, 0x4f, 0x4f],
            show_environment: true,
        }
    }
}

/// Panel visibility flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub show_side_panel: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            show_side_panel: true,
        }
    }
}

/// Assembly report settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Report language
    pub lang: Lang,
    /// Report title; the localized default is used when empty
    pub title: String,
    /// Currency label after prices; the localized default is used when empty
    pub currency: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            lang: Lang::Ru,
            title: String::new(),
            currency: String::new(),
        }
    }
}

impl ExportSettings {
    /// Configured currency label, or the one for `lang`
    pub fn currency_label(&self) -> &str {
        if self.currency.is_empty() {
            t_in(self.lang, "report.currency")
        } else {
            &self.currency
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Unit dimensions used for placement
    #[serde(default)]
    pub dimensions: UnitDimensions,
    /// Price list
    #[serde(default)]
    pub prices: PriceTable,
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub panels: PanelSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

impl AppSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "modcfg", "configurator")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config dir, or return default if not found
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(settings) => return settings,
                    Err(e) => tracing::warn!("Ignoring settings file: {e}"),
                }
            }
        }
        Self::default()
    }

    /// Load settings from an explicit JSON file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        serde_json::from_str(&json).map_err(|e| format!("Invalid settings JSON in {}: {e}", path.display()))
    }

    /// Save settings to the config dir; failures are logged
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            tracing::warn!("No config dir available, settings not saved");
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::warn!("Failed to save settings: {e}");
        }
    }

    /// Save settings to an explicit JSON file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(config_dir) = path.parent() {
            std::fs::create_dir_all(config_dir)
                .map_err(|e| format!("Failed to create {}: {e}", config_dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalog() {
        let s = AppSettings::default();
        assert_eq!(s.dimensions, UnitDimensions::STANDARD);
        assert_eq!(s.prices, PriceTable::STANDARD);
        assert_eq!(s.export.lang, Lang::Ru);
        assert!(s.panels.show_side_panel);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{"prices": {"base_unit": 90000, "window": 10000, "door": 12000}}"#;
        let s: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.prices.base_unit, 90_000);
        assert_eq!(s.dimensions, UnitDimensions::STANDARD);
        assert_eq!(s.viewport.face_highlight, [0xff, 0x4f, 0x4f]);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let err = AppSettings::load_from(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(err.contains("Failed to read"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("configurator-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"export": {"lang": "en", "title": "Site A"}}"#).unwrap();
        let s = AppSettings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(s.export.lang, Lang::En);
        assert_eq!(s.export.title, "Site A");
    }

    #[test]
    fn test_currency_label() {
        let mut export = ExportSettings::default();
        assert_eq!(export.currency_label(), "руб.");
        export.lang = Lang::En;
        assert_eq!(export.currency_label(), "RUB");
        export.currency = "€".to_string();
        assert_eq!(export.currency_label(), "€");
    }

    #[test]
    fn test_save_to_roundtrip_and_bad_dir() {
        let dir = std::env::temp_dir().join(format!("configurator-save-{}", std::process::id()));
        let path = dir.join("nested").join("settings.json");
        let mut s = AppSettings::default();
        s.export.title = "Site B".to_string();
        s.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap().export.title, "Site B");

        // a regular file cannot act as a directory
        let blocked = path.join("settings.json");
        let err = s.save_to(&blocked).unwrap_err();
        std::fs::remove_dir_all(&dir).ok();
        assert!(err.contains("Failed to create"));
    }
}
