use crate::core::config::data::{Config, DEFAULT_BASE_URL};
use crate::ui::theme::Theme;

impl Config {
    /// Pick the coach origin: CLI flag, then environment, then config file,
    /// then the built-in default. Blank values are skipped.
    pub fn resolve_base_url(&self, cli: Option<&str>, env: Option<String>) -> String {
        cli.map(str::to_string)
            .into_iter()
            .chain(env)
            .chain(self.base_url.clone())
            .map(|candidate| candidate.trim().to_string())
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Theme named in the config, falling back to the default palette for
    /// unknown or missing names.
    pub fn resolve_theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or_default()
    }
}
