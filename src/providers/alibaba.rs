use crate::core::{FareProvider, NormalizedQuery, ProviderError, ProviderRequest, ProviderSpec};
use crate::providers::util::{FlightList, search_request};
use async_trait::async_trait;
use serde::Deserialize;

/// Alibaba wraps its offers in `result.flights` with flat prices.
pub struct AlibabaProvider {
    spec: ProviderSpec,
}

impl AlibabaProvider {
    pub fn new(spec: ProviderSpec) -> Self {
        AlibabaProvider { spec }
    }
}

#[derive(Debug, Deserialize)]
struct AlibabaResponse {
    result: Option<FlightList<f64>>,
}

#[async_trait]
impl FareProvider for AlibabaProvider {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn build_request(&self, query: &NormalizedQuery) -> Result<ProviderRequest, ProviderError> {
        search_request(&self.spec, query)
    }

    fn extract_min_price(&self, body: &str) -> Result<Option<f64>, ProviderError> {
        let response: AlibabaResponse = serde_json::from_str(body)?;
        Ok(response.result.and_then(FlightList::min_price))
    }
}
