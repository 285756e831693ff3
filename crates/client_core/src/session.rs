use shared::{
    domain::{Country, NameField},
    filter::{apply_filters, distinct_regions, CurrencyCategory, FilterCriteria},
};
use tracing::debug;

use crate::{card::CountryCard, CountrySource, LoadError};

/// One directory view: the record snapshot fetched at entry plus the filter
/// criteria the user edits. The snapshot is never written after [`load`].
///
/// [`load`]: ViewSession::load
#[derive(Debug, Clone)]
pub struct ViewSession {
    countries: Vec<Country>,
    criteria: FilterCriteria,
    demonym_language: String,
}

impl ViewSession {
    pub async fn load(
        source: &dyn CountrySource,
        name_field: NameField,
        demonym_language: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let countries = source.load_countries().await?;
        Ok(Self::from_countries(countries, name_field, demonym_language))
    }

    pub fn from_countries(
        countries: Vec<Country>,
        name_field: NameField,
        demonym_language: impl Into<String>,
    ) -> Self {
        Self {
            countries,
            criteria: FilterCriteria::with_name_field(name_field),
            demonym_language: demonym_language.into(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        debug!(query = %self.criteria.query, "search text changed");
    }

    /// `None` or an empty selection lifts the region restriction.
    pub fn set_region(&mut self, region: Option<String>) {
        self.criteria.region = region.filter(|region| !region.is_empty());
        debug!(region = ?self.criteria.region, "region filter changed");
    }

    pub fn set_currency(&mut self, currency: CurrencyCategory) {
        self.criteria.currency = currency;
        debug!(%currency, "currency filter changed");
    }

    pub fn set_name_field(&mut self, name_field: NameField) {
        self.criteria.name_field = name_field;
    }

    pub fn clear(&mut self) {
        let name_field = std::mem::take(&mut self.criteria.name_field);
        self.criteria = FilterCriteria::with_name_field(name_field);
    }

    pub fn visible(&self) -> Vec<&Country> {
        apply_filters(&self.countries, &self.criteria)
    }

    pub fn visible_cards(&self) -> Vec<CountryCard> {
        self.visible()
            .into_iter()
            .map(|country| {
                CountryCard::new(country, &self.criteria.name_field, &self.demonym_language)
            })
            .collect()
    }

    pub fn regions(&self) -> Vec<&str> {
        distinct_regions(&self.countries)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
