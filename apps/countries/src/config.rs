use std::{collections::HashMap, fs};

use client_core::DEFAULT_API_URL;
use shared::domain::{NameField, DEFAULT_TRANSLATION_LANGUAGE};

pub const SETTINGS_FILE: &str = "countries.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    /// `None` shows common (English) names.
    pub name_language: Option<String>,
    pub demonym_language: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            name_language: Some(DEFAULT_TRANSLATION_LANGUAGE.into()),
            demonym_language: DEFAULT_TRANSLATION_LANGUAGE.into(),
            log_filter: "warn".into(),
        }
    }
}

impl Settings {
    pub fn name_field(&self) -> NameField {
        match &self.name_language {
            Some(language) => NameField::translation(language.clone()),
            None => NameField::Common,
        }
    }
}

/// Settings plus the parse error of a settings file that had to be skipped.
/// Logging is not set up while settings load, so the caller reports it.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub file_error: Option<toml::de::Error>,
}

pub fn load_settings() -> LoadedSettings {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(raw.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then environment variables.
pub fn settings_from_sources(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut file_error = None;

    if let Some(raw) = file_contents {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_url") {
                    settings.api_url = v.clone();
                }
                if let Some(v) = file_cfg.get("name_lang") {
                    settings.name_language = language_setting(v);
                }
                if let Some(v) = file_cfg.get("demonym_lang") {
                    settings.demonym_language = v.clone();
                }
                if let Some(v) = file_cfg.get("log_filter") {
                    settings.log_filter = v.clone();
                }
            }
            Err(err) => file_error = Some(err),
        }
    }

    if let Some(v) = env("COUNTRIES_API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }

    if let Some(v) = env("COUNTRIES_NAME_LANG") {
        settings.name_language = language_setting(&v);
    }
    if let Some(v) = env("APP__NAME_LANG") {
        settings.name_language = language_setting(&v);
    }

    if let Some(v) = env("APP__DEMONYM_LANG") {
        settings.demonym_language = v;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    LoadedSettings {
        settings,
        file_error,
    }
}

/// An empty value or `common` selects common names.
fn language_setting(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("common") {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
