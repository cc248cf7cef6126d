use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "SpendDashboard";
const DEFAULT_DATA_FILE: &str = "db.json";

/// Stores user-configurable dashboard preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional path to the data document. Defaults to `~/Documents/SpendDashboard/db.json`.
    pub data_source: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user_id: Option<u64>,
    #[serde(default = "Config::default_rows_per_page")]
    pub rows_per_page: usize,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            data_source: None,
            default_user_id: None,
            rows_per_page: Self::default_rows_per_page(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_rows_per_page() -> usize {
        10
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_source(&self) -> PathBuf {
        if let Some(path) = &self.data_source {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DEFAULT_DATA_DIR).join(DEFAULT_DATA_FILE)
    }
}
