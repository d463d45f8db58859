use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::Theme;

/// Origin used when neither the CLI, the environment nor the config file
/// names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "HOTMESS_COACH_BASE_URL";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin serving the coach endpoint (e.g., "http://localhost:3000")
    pub base_url: Option<String>,
    /// UI theme name ("harvest" or "monochrome")
    pub theme: Option<String>,
}

/// Keys accepted by `set` and `unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BaseUrl,
    Theme,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::BaseUrl, ConfigKey::Theme];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Theme => "theme",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == key.trim())
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn set_value(&mut self, key: ConfigKey, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("A value is required for {}", key.as_str()));
        }
        match key {
            ConfigKey::BaseUrl => {
                let parsed = reqwest::Url::parse(value)
                    .map_err(|e| format!("Invalid base URL '{value}': {e}"))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(format!(
                        "Invalid base URL '{value}': only http and https are supported"
                    ));
                }
                self.base_url = Some(value.to_string());
            }
            ConfigKey::Theme => {
                if Theme::from_name(value).is_none() {
                    return Err(format!(
                        "Unknown theme '{value}' (available: {})",
                        Theme::NAMES.join(", ")
                    ));
                }
                self.theme = Some(value.to_ascii_lowercase());
            }
        }
        Ok(())
    }

    pub fn unset_value(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::BaseUrl => self.base_url = None,
            ConfigKey::Theme => self.theme = None,
        }
    }
}
