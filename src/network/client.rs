//! HTTP client wrapper - fetches and parses the country catalog

use std::future::Future;

use crate::models::CountryRecord;
use crate::network::error::FetchError;

/// Where the country list comes from
pub trait CountrySource: Send + Sync + 'static {
    /// One attempt, no retry
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<CountryRecord>, FetchError>> + Send;
}

/// The public REST catalog
#[derive(Clone, Debug)]
pub struct HttpCountrySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCountrySource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpCountrySource {
            client: create_client(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CountrySource for HttpCountrySource {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
        let resp = self.client.get(&self.endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        parse_countries(&body)
    }
}

/// Structural parse of a catalog body; no further validation
pub fn parse_countries(body: &str) -> Result<Vec<CountryRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Create an HTTP client with default configuration.
///
/// No timeout: the fetch either completes or fails on its own.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("country-challenge/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
