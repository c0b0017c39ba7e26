use crate::core::{FareProvider, NormalizedQuery, ProviderError, ProviderRequest, ProviderSpec};
use crate::providers::util::{FlightList, search_request};
use async_trait::async_trait;

/// Flightio returns offers at the top level under `flights` with flat prices.
pub struct FlightioProvider {
    spec: ProviderSpec,
}

impl FlightioProvider {
    pub fn new(spec: ProviderSpec) -> Self {
        FlightioProvider { spec }
    }
}

#[async_trait]
impl FareProvider for FlightioProvider {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn build_request(&self, query: &NormalizedQuery) -> Result<ProviderRequest, ProviderError> {
        search_request(&self.spec, query)
    }

    fn extract_min_price(&self, body: &str) -> Result<Option<f64>, ProviderError> {
        let response: FlightList<f64> = serde_json::from_str(body)?;
        Ok(response.min_price())
    }
}
