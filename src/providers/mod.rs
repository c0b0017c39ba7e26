pub mod alibaba;
pub mod flightio;
pub mod flytoday;
pub mod mrbilit;
pub mod snapptrip;
pub mod util;

use crate::core::FareProvider;
use crate::core::config::{ProviderConfig, ProviderKind};
use anyhow::{Result, bail};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Creates the adapter for a configured provider.
pub fn build_provider(config: &ProviderConfig) -> Arc<dyn FareProvider> {
    let spec = config.spec();
    match config.kind {
        ProviderKind::SnappTrip => Arc::new(snapptrip::SnappTripProvider::new(spec)),
        ProviderKind::MrBilit => Arc::new(mrbilit::MrBilitProvider::new(spec)),
        ProviderKind::Alibaba => Arc::new(alibaba::AlibabaProvider::new(spec)),
        ProviderKind::FlyToday => Arc::new(flytoday::FlyTodayProvider::new(spec)),
        ProviderKind::Flightio => Arc::new(flightio::FlightioProvider::new(spec)),
    }
}

/// The ordered, immutable set of providers a search is dispatched to.
///
/// Provider names are unique, so a search yields at most one quote per name.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn FareProvider>>,
}

impl ProviderRegistry {
    pub fn new(providers: Vec<Arc<dyn FareProvider>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for provider in &providers {
            let name = &provider.spec().name;
            if !seen.insert(name.clone()) {
                bail!("Duplicate provider name: {name}");
            }
        }
        Ok(ProviderRegistry { providers })
    }

    pub fn from_config(configs: &[ProviderConfig]) -> Result<Self> {
        Self::new(configs.iter().map(build_provider).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FareProvider>> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers
            .iter()
            .map(|p| p.spec().name.as_str())
            .collect()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
