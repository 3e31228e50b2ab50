use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "birthdays.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: Option<u64>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.wikimedia.org/".into(),
            user_agent: concat!("birthdays/", env!("CARGO_PKG_VERSION")).into(),
            request_timeout_secs: None,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Base URL with a trailing slash so relative feed paths join under it.
    pub fn base_url(&self) -> anyhow::Result<Url> {
        let raw = self.api_base_url.trim();
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        Url::parse(&normalized).with_context(|| format!("invalid api base url '{raw}'"))
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(DEFAULT_CONFIG_FILE))
}

pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        tracing::warn!("ignoring unreadable settings file");
        return;
    };

    if let Some(v) = file_cfg.get("api_base_url").and_then(toml::Value::as_str) {
        settings.api_base_url = v.to_string();
    }
    if let Some(v) = file_cfg.get("user_agent").and_then(toml::Value::as_str) {
        settings.user_agent = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("request_timeout_secs")
        .and_then(toml::Value::as_integer)
    {
        settings.request_timeout_secs = u64::try_from(v).ok();
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
}

fn apply_env_overrides(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("BIRTHDAYS_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = env("APP__USER_AGENT") {
        settings.user_agent = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = Some(parsed);
        }
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
