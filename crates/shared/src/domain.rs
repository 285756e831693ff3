use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Translation language used by the localized views.
pub const DEFAULT_TRANSLATION_LANGUAGE: &str = "fra";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagImage {
    #[serde(rename = "png")]
    pub url: String,
    #[serde(rename = "alt", default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demonym {
    #[serde(rename = "f", default)]
    pub feminine: String,
    #[serde(rename = "m", default)]
    pub masculine: String,
}

/// One country as served by the restcountries v3.1 API.
///
/// Only the fields the directory consumes are modelled; anything else in the
/// payload is ignored on decode. Optional collections decode to empty maps or
/// vectors so a sparse record is kept rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(rename = "flags")]
    pub flag_image: FlagImage,
    #[serde(rename = "flag", default, skip_serializing_if = "Option::is_none")]
    pub flag_emoji: Option<String>,
    #[serde(default)]
    pub translations: BTreeMap<String, Translation>,
    #[serde(default)]
    pub capital: Vec<String>,
    pub region: String,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub demonyms: BTreeMap<String, Demonym>,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn localized_name(&self, language: &str) -> Option<&str> {
        self.translations
            .get(language)
            .map(|translation| translation.common.as_str())
    }

    /// Name shown (and searched) by a view using `field`. Falls back to the
    /// common name when the requested translation is missing.
    pub fn display_name(&self, field: &NameField) -> &str {
        match field {
            NameField::Common => self.common_name(),
            NameField::Translation(language) => self
                .localized_name(language)
                .unwrap_or_else(|| self.common_name()),
        }
    }

    pub fn demonym(&self, language: &str) -> Option<&Demonym> {
        self.demonyms.get(language)
    }

    pub fn has_currency_named(&self, name: &str) -> bool {
        self.currencies.values().any(|currency| currency.name == name)
    }
}

/// Which name a view displays and matches the text query against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum NameField {
    #[default]
    Common,
    Translation(String),
}

impl NameField {
    pub fn translation(language: impl Into<String>) -> Self {
        Self::Translation(language.into())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
