use crate::core::{FareProvider, NormalizedQuery, ProviderError, ProviderRequest, ProviderSpec};
use crate::providers::util::{FlightList, search_request};
use async_trait::async_trait;
use serde::Deserialize;

/// FlyToday lists offers under `data.flights` with flat prices.
pub struct FlyTodayProvider {
    spec: ProviderSpec,
}

impl FlyTodayProvider {
    pub fn new(spec: ProviderSpec) -> Self {
        FlyTodayProvider { spec }
    }
}

#[derive(Debug, Deserialize)]
struct FlyTodayResponse {
    data: Option<FlightList<f64>>,
}

#[async_trait]
impl FareProvider for FlyTodayProvider {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn build_request(&self, query: &NormalizedQuery) -> Result<ProviderRequest, ProviderError> {
        search_request(&self.spec, query)
    }

    fn extract_min_price(&self, body: &str) -> Result<Option<f64>, ProviderError> {
        let response: FlyTodayResponse = serde_json::from_str(body)?;
        Ok(response.data.and_then(FlightList::min_price))
    }
}
