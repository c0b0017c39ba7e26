use crate::core::{FareProvider, NormalizedQuery, ProviderError, ProviderRequest, ProviderSpec};
use crate::providers::util::{FlightList, search_request};
use async_trait::async_trait;

/// MrBilit returns offers at the top level under `flights` with flat prices.
pub struct MrBilitProvider {
    spec: ProviderSpec,
}

impl MrBilitProvider {
    pub fn new(spec: ProviderSpec) -> Self {
        MrBilitProvider { spec }
    }
}

#[async_trait]
impl FareProvider for MrBilitProvider {
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
