//! API Configuration
//!
//! Loaded from `api_config.json` in the app config directory.
//! `PROMO_API_URL` overrides the base URL.

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "api_config.json";
pub const API_URL_ENV: &str = "PROMO_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Trim whitespace and trailing slashes from a server address
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').trim_end().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

impl ApiConfig {
    /// Read the config file from `config_dir`, falling back to defaults
    /// when it is missing or malformed, then apply the env override.
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(CONFIG_FILE);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<ApiConfig>(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                ApiConfig::default()
            }),
            Err(_) => ApiConfig::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }

        config.normalized()
    }

    /// Copy of this config pointing at `raw`, or `None` when the address
    /// is empty once normalized (`"/"`, `"  //  "`).
    pub fn with_base_url(&self, raw: &str) -> Option<Self> {
        let base_url = normalize_base_url(raw);
        if base_url.is_empty() {
            return None;
        }
        Some(Self {
            base_url,
            ..self.clone()
        })
    }

    /// Persist to `config_dir`
    pub fn save(&self, config_dir: &Path) -> Result<(), String> {
        std::fs::create_dir_all(config_dir).map_err(|e| e.to_string())?;
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(config_dir.join(CONFIG_FILE), json).map_err(|e| e.to_string())
    }

    fn normalized(mut self) -> Self {
        self.base_url = normalize_base_url(&self.base_url);
        if self.base_url.is_empty() {
            self.base_url = DEFAULT_BASE_URL.to_string();
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = ApiConfig::default().timeout_secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The env override is process-global, so it is exercised in a single test.
    #[test]
    fn test_load_sources() {
        std::env::remove_var(API_URL_ENV);
        let dir = tempfile::tempdir().unwrap();

        // Missing file
        assert_eq!(ApiConfig::load(dir.path()), ApiConfig::default());

        // Malformed file
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(ApiConfig::load(dir.path()), ApiConfig::default());

        // Saved file, trailing slash trimmed, missing fields defaulted
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"base_url":"http://10.0.2.2:3000/"}"#).unwrap();
        let config = ApiConfig::load(dir.path());
        assert_eq!(config.base_url, "http://10.0.2.2:3000");
        assert_eq!(config.timeout_secs, 15);

        // Env wins over file
        std::env::set_var(API_URL_ENV, "http://api.example.test");
        assert_eq!(ApiConfig::load(dir.path()).base_url, "http://api.example.test");
        std::env::remove_var(API_URL_ENV);
    }

    #[test]
    fn test_with_base_url_rejects_slash_only() {
        let config = ApiConfig::default();
        for raw in ["", "   ", "/", "///", " / "] {
            assert_eq!(config.with_base_url(raw), None, "{:?}", raw);
        }

        let updated = config.with_base_url(" http://10.0.2.2:3000// ").unwrap();
        assert_eq!(updated.base_url, "http://10.0.2.2:3000");
        assert_eq!(updated.timeout_secs, config.timeout_secs);
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = ApiConfig {
            base_url: "http://192.168.0.10:3000".into(),
            timeout_secs: 5,
        };
        config.save(&dir.path().join("nested")).unwrap();
        let content = std::fs::read_to_string(dir.path().join("nested").join(CONFIG_FILE)).unwrap();
        let back: ApiConfig = serde_json::from_str(&content).unwrap();
        assert_eq!(back, config);
    }
}
