use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use shared::protocol::{CONTACT_PATH, HIDDEN_PAGE_PATH};

pub const DEFAULT_CONFIG_FILE: &str = "page.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_url: String,
    pub contact_path: String,
    pub hidden_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            contact_path: CONTACT_PATH.into(),
            hidden_path: HIDDEN_PAGE_PATH.into(),
        }
    }
}

pub fn load_settings(config_file: &Path) -> Settings {
    load_settings_from(config_file, |key| std::env::var(key).ok())
}

/// File values override defaults; environment overrides the file.
pub fn load_settings_from(config_file: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_file) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("server_url") {
                    settings.server_url = v.clone();
                }
                if let Some(v) = file_cfg.get("contact_path") {
                    settings.contact_path = v.clone();
                }
                if let Some(v) = file_cfg.get("hidden_path") {
                    settings.hidden_path = v.clone();
                }
            }
            Err(err) => tracing::warn!(
                file = %config_file.display(),
                error = %err,
                "ignoring unreadable config file"
            ),
        }
    }

    if let Some(v) = env("PAGE_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__CONTACT_PATH") {
        settings.contact_path = v;
    }
    if let Some(v) = env("APP__HIDDEN_PATH") {
        settings.hidden_path = v;
    }

    settings.server_url = settings.server_url.trim().to_string();
    settings.contact_path = normalize_path(&settings.contact_path, CONTACT_PATH);
    settings.hidden_path = normalize_path(&settings.hidden_path, HIDDEN_PAGE_PATH);
    settings
}

fn normalize_path(raw: &str, fallback: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return fallback.to_string();
    }
    if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{raw}")
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
