use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::domain::Country;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

pub mod card;
pub mod session;

pub use card::{CountryCard, NOT_AVAILABLE};
pub use session::ViewSession;

pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the API; everything the directory reads and nothing more.
pub const REQUESTED_FIELDS: [&str; 9] = [
    "flag",
    "flags",
    "name",
    "translations",
    "capital",
    "region",
    "languages",
    "currencies",
    "demonyms",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid country API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("country API at {url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("country API at {url} returned an unexpected payload: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything able to produce the full country list for a view session.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn load_countries(&self) -> Result<Vec<Country>, LoadError>;
}

#[derive(Debug, Clone)]
pub struct CountryClient {
    http: Client,
    endpoint: Url,
}

impl CountryClient {
    pub fn new(api_url: &str) -> Result<Self, LoadError> {
        Self::with_http_client(Client::new(), api_url)
    }

    pub fn with_http_client(http: Client, api_url: &str) -> Result<Self, LoadError> {
        Ok(Self {
            http,
            endpoint: all_countries_endpoint(api_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CountrySource for CountryClient {
    async fn load_countries(&self) -> Result<Vec<Country>, LoadError> {
        let url = self.endpoint.to_string();
        debug!(%url, "fetching countries");

        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|source| LoadError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "country API rejected request");
            return Err(LoadError::Status { url, status });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Request {
            url: url.clone(),
            source,
        })?;
        let countries: Vec<Country> =
            serde_json::from_slice(&body).map_err(|source| LoadError::Decode {
                url: url.clone(),
                source,
            })?;

        info!(count = countries.len(), "loaded countries");
        Ok(countries)
    }
}

fn all_countries_endpoint(api_url: &str) -> Result<Url, LoadError> {
    let invalid = |reason: String| LoadError::InvalidUrl {
        url: api_url.to_string(),
        reason,
    };

    let mut endpoint = Url::parse(api_url.trim()).map_err(|err| invalid(err.to_string()))?;
    endpoint
        .path_segments_mut()
        .map_err(|()| invalid("url cannot carry a path".into()))?
        .pop_if_empty()
        .push("all");
    endpoint.set_query(None);
    endpoint
        .query_pairs_mut()
        .append_pair("fields", &REQUESTED_FIELDS.join(","));
    Ok(endpoint)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
