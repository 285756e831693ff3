use std::fmt;

use shared::domain::{Country, NameField};

/// Placeholder shown for data the record does not carry.
pub const NOT_AVAILABLE: &str = "NA";

/// Display values for one country, with every gap already filled by
/// [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCard {
    pub title: String,
    pub subtitle: String,
    pub flag_url: String,
    pub flag_alt: String,
    pub capital: String,
    pub region: String,
    pub languages: String,
    pub currencies: String,
    pub demonyms: String,
}

impl CountryCard {
    pub fn new(country: &Country, name_field: &NameField, demonym_language: &str) -> Self {
        Self {
            title: country.display_name(name_field).to_string(),
            subtitle: country.common_name().to_string(),
            flag_url: country.flag_image.url.clone(),
            flag_alt: country.flag_image.alt_text.clone(),
            capital: or_not_available(
                country
                    .capital
                    .first()
                    .map(String::as_str)
                    .unwrap_or_default(),
            ),
            region: country.region.clone(),
            languages: or_not_available(
                &country
                    .languages
                    .values()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            currencies: or_not_available(
                &country
                    .currencies
                    .values()
                    .map(|currency| format!("{} ({})", currency.name, currency.symbol))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            demonyms: demonym_line(country, demonym_language),
        }
    }
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn demonym_line(country: &Country, language: &str) -> String {
    let demonym = country.demonym(language);
    let feminine = demonym.map(|d| d.feminine.as_str()).unwrap_or_default();
    let masculine = demonym.map(|d| d.masculine.as_str()).unwrap_or_default();
    format!(
        "F: {} M: {}",
        or_not_available(feminine),
        or_not_available(masculine)
    )
}

impl fmt::Display for CountryCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.subtitle)?;
        if self.flag_alt.is_empty() {
            writeln!(f, "  Flag:       {}", self.flag_url)?;
        } else {
            writeln!(f, "  Flag:       {} ({})", self.flag_url, self.flag_alt)?;
        }
        writeln!(f, "  Capital:    {}", self.capital)?;
        writeln!(f, "  Region:     {}", self.region)?;
        writeln!(f, "  Languages:  {}", self.languages)?;
        writeln!(f, "  Currencies: {}", self.currencies)?;
        write!(f, "  Demonyms:   {}", self.demonyms)
    }
}

#[cfg(test)]
#[path = "tests/card_tests.rs"]
mod tests;
