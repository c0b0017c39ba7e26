//! Fans a search out to every registered provider and collects the quotes.

use crate::core::config::AppConfig;
use crate::core::{FareProvider, NormalizedQuery, ProviderError, ProviderOutcome, Quote};
use crate::providers::ProviderRegistry;
use anyhow::{Context, Result};
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

pub struct SearchEngine {
    registry: Arc<ProviderRegistry>,
    client: Client,
    provider_timeout: Duration,
}

impl SearchEngine {
    pub fn new(registry: Arc<ProviderRegistry>, client: Client, provider_timeout: Duration) -> Self {
        SearchEngine {
            registry,
            client,
            provider_timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let registry = ProviderRegistry::from_config(&config.providers)
            .context("Failed to build provider registry")?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::new(Arc::new(registry), client, config.timeout()))
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Returns the quote of every provider that had one, in registry order.
    ///
    /// Provider failures are logged and dropped; they never fail the search.
    #[instrument(
        name = "FareSearch",
        skip(self, query),
        fields(origin = %query.origin, destination = %query.destination, date = %query.departure_date)
    )]
    pub async fn search(&self, query: &NormalizedQuery) -> Vec<Quote> {
        let quotes: Vec<Quote> = self
            .collect_outcomes(query)
            .await
            .into_iter()
            .filter_map(ProviderOutcome::into_quote)
            .collect();
        info!(
            "Collected {} quotes from {} providers",
            quotes.len(),
            self.registry.len()
        );
        quotes
    }

    /// Queries all providers concurrently and waits for every one of them to
    /// settle. Outcomes are in registry order.
    pub async fn collect_outcomes(&self, query: &NormalizedQuery) -> Vec<ProviderOutcome> {
        let tasks = self
            .registry
            .iter()
            .map(|provider| self.query_provider(provider.as_ref(), query));
        join_all(tasks).await
    }

    async fn query_provider(
        &self,
        provider: &dyn FareProvider,
        query: &NormalizedQuery,
    ) -> ProviderOutcome {
        let spec = provider.spec();
        let result = timeout(
            self.provider_timeout,
            provider.fetch_min_price(&self.client, query),
        )
        .await
        .unwrap_or(Err(ProviderError::Timeout(self.provider_timeout)));

        match result {
            Ok(Some(price)) if price != 0.0 && !price.is_nan() => {
                debug!(provider = %spec.name, price, "Found lowest fare");
                ProviderOutcome::Quote(Quote {
                    site: spec.name.clone(),
                    price,
                    url: spec.display_url(),
                })
            }
            Ok(_) => {
                debug!(provider = %spec.name, "No offers in response");
                ProviderOutcome::NoOffer
            }
            Err(e) => {
                warn!(provider = %spec.name, error = %e, "Provider request failed");
                ProviderOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
