use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Country, NameField},
    error::UnknownCurrencyCategory,
};

/// Closed set of currency filters offered by the directory.
///
/// Matching is done on the English currency name the source publishes, not on
/// the ISO code, so a category only matches records whose currency carries
/// exactly that name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyCategory {
    #[default]
    None,
    Euro,
    Dollar,
    Pound,
}

impl CurrencyCategory {
    pub const ALL: [CurrencyCategory; 4] = [Self::None, Self::Euro, Self::Dollar, Self::Pound];

    pub fn source_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Euro => Some("Euro"),
            Self::Dollar => Some("United States dollar"),
            Self::Pound => Some("British pound"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "ALL",
            Self::Euro => "€",
            Self::Dollar => "$",
            Self::Pound => "£",
        }
    }

    pub fn matches(self, country: &Country) -> bool {
        match self.source_name() {
            Some(name) => country.has_currency_named(name),
            None => true,
        }
    }
}

impl fmt::Display for CurrencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "NONE",
            Self::Euro => "EURO",
            Self::Dollar => "DOLLAR",
            Self::Pound => "POUND",
        };
        f.write_str(name)
    }
}

impl FromStr for CurrencyCategory {
    type Err = UnknownCurrencyCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(category) = Self::ALL
            .into_iter()
            .find(|category| category.label() == trimmed)
        {
            return Ok(category);
        }

        match trimmed.to_ascii_uppercase().as_str() {
            "NONE" | "ALL" | "" => Ok(Self::None),
            "EURO" | "EUR" => Ok(Self::Euro),
            "DOLLAR" | "USD" => Ok(Self::Dollar),
            "POUND" | "GBP" => Ok(Self::Pound),
            _ => Err(UnknownCurrencyCategory::new(s)),
        }
    }
}

/// Active filter selections for one view session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub region: Option<String>,
    pub currency: CurrencyCategory,
    pub name_field: NameField,
}

impl FilterCriteria {
    pub fn with_name_field(name_field: NameField) -> Self {
        Self {
            name_field,
            ..Self::default()
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        !self.has_query() && self.region.is_none() && self.currency == CurrencyCategory::None
    }

    fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    fn matches_query(&self, country: &Country) -> bool {
        if !self.has_query() {
            return true;
        }
        country
            .display_name(&self.name_field)
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    fn matches_region(&self, country: &Country) -> bool {
        match &self.region {
            Some(region) => country.region == *region,
            None => true,
        }
    }

    pub fn matches(&self, country: &Country) -> bool {
        self.matches_query(country)
            && self.matches_region(country)
            && self.currency.matches(country)
    }
}

/// Returns the records matching every active criterion, in input order.
pub fn apply_filters<'a>(records: &'a [Country], criteria: &FilterCriteria) -> Vec<&'a Country> {
    if criteria.is_unrestricted() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|country| criteria.matches(country))
        .collect()
}

/// Distinct region values in order of first appearance.
pub fn distinct_regions(records: &[Country]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|country| country.region.as_str())
        .filter(|region| seen.insert(*region))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
