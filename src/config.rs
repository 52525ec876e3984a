use crate::models::Page;
use anyhow::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sidebar_collapsed: bool,
    pub remember_email: bool,
    pub last_email: Option<String>,
    pub start_page: Page,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            remember_email: true,
            last_email: None,
            start_page: Page::Dashboard,
        }
    }
}

impl Config {
    pub fn load_or_default() -> Self {
        match Self::get_config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!("could not locate config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Unreadable or malformed files fall back to the defaults.
    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!("could not load config from {}, using defaults: {}", config_path.display(), e);
            Self::default()
        })
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            debug!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        debug!("saved config to {}", config_path.display());
        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("vista-guard").join("config.json"))
    }

    /// Records the email of a successful login when remembering is enabled.
    pub fn remember_login(&mut self, email: &str) {
        if self.remember_email {
            self.last_email = Some(email.to_string());
        }
    }

    pub fn set_remember_email(&mut self, remember: bool) {
        self.remember_email = remember;
        if !remember {
            self.last_email = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            sidebar_collapsed: true,
            remember_email: true,
            last_email: Some("admin@demo.com".to_string()),
            start_page: Page::Events,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "start_page": "Cameras" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.start_page, Page::Cameras);
        assert!(config.remember_email, "Missing keys should take default values");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ sidebar_collapsed: yes").unwrap();

        assert_eq!(Config::load_from_or_default(&path), Config::default());

        let saved = Config {
            start_page: Page::Alerts,
            ..Config::default()
        };
        saved.save_to(&path).unwrap();
        assert_eq!(Config::load_from_or_default(&path), saved, "A valid file should still be honoured");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_remember_login() {
        let mut config = Config::default();
        config.remember_login("admin@demo.com");
        assert_eq!(config.last_email.as_deref(), Some("admin@demo.com"));

        config.set_remember_email(false);
        assert_eq!(config.last_email, None, "Disabling remember should forget the email");

        config.remember_login("admin@demo.com");
        assert_eq!(config.last_email, None);
    }
}
