//! Fare search abstractions and core types

use crate::core::calendar::to_provider_calendar;
use crate::core::error::{ProviderError, SearchError};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A validated search as received from a caller, with a local calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub passengers: u32,
}

impl SearchQuery {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        passengers: u32,
    ) -> Result<Self, SearchError> {
        if passengers == 0 {
            return Err(SearchError::InvalidParameter {
                name: "passengers",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            passengers,
        })
    }

    /// Converts the local date into the provider calendar.
    pub fn normalize(&self) -> Result<NormalizedQuery, SearchError> {
        Ok(NormalizedQuery {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            departure_date: to_provider_calendar(&self.date)?,
            adults: self.passengers,
        })
    }
}

/// A search with its date already in the `YYYY-MM-DD` form providers expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub adults: u32,
}

/// Identity and endpoint of a single provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpec {
    pub name: String,
    pub base_url: String,
}

impl ProviderSpec {
    pub fn new(name: &str, base_url: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// The provider's site as shown to users: the base URL without its API segment.
    pub fn display_url(&self) -> String {
        self.base_url.replacen("/api", "", 1)
    }
}

/// The lowest fare a provider advertised for a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub site: String,
    pub price: f64,
    pub url: String,
}

/// What happened when a single provider was asked for a fare.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Quote(Quote),
    NoOffer,
    Failed { reason: String },
}

impl ProviderOutcome {
    pub fn into_quote(self) -> Option<Quote> {
        match self {
            ProviderOutcome::Quote(quote) => Some(quote),
            _ => None,
        }
    }
}

/// An outbound request ready to be sent to a provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub url: Url,
    pub headers: HeaderMap,
}

#[async_trait]
pub trait FareProvider: Send + Sync {
    fn spec(&self) -> &ProviderSpec;

    fn build_request(&self, query: &NormalizedQuery) -> Result<ProviderRequest, ProviderError>;

    /// Finds the lowest advertised price in a raw response body.
    ///
    /// Returns `Ok(None)` when the body has no offers at the expected location.
    fn extract_min_price(&self, body: &str) -> Result<Option<f64>, ProviderError>;

    async fn fetch_min_price(
        &self,
        client: &Client,
        query: &NormalizedQuery,
    ) -> Result<Option<f64>, ProviderError> {
        let request = self.build_request(query)?;
        debug!(provider = %self.spec().name, url = %request.url, "Requesting fares");

        let response = client
            .get(request.url)
            .headers(request.headers)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let body = response.text().await?;
        self.extract_min_price(&body)
    }
}
