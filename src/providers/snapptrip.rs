use crate::core::{FareProvider, NormalizedQuery, ProviderError, ProviderRequest, ProviderSpec};
use crate::providers::util::{Amount, FlightList, search_request};
use async_trait::async_trait;
use serde::Deserialize;

/// SnappTrip lists offers under `data.flights`, each priced as `{ "amount": .. }`.
pub struct SnappTripProvider {
    spec: ProviderSpec,
}

impl SnappTripProvider {
    pub fn new(spec: ProviderSpec) -> Self {
        SnappTripProvider { spec }
    }
}

#[derive(Debug, Deserialize)]
struct SnappTripResponse {
    data: Option<FlightList<Amount>>,
}

#[async_trait]
impl FareProvider for SnappTripProvider {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn build_request(&self, query: &NormalizedQuery) -> Result<ProviderRequest, ProviderError> {
        search_request(&self.spec, query)
    }

    fn extract_min_price(&self, body: &str) -> Result<Option<f64>, ProviderError> {
        let response: SnappTripResponse = serde_json::from_str(body)?;
        Ok(response.data.and_then(FlightList::min_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::util::BROWSER_USER_AGENT;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(base_url: &str) -> SnappTripProvider {
        SnappTripProvider::new(ProviderSpec::new("SnappTrip", base_url))
    }

    fn query() -> NormalizedQuery {
        NormalizedQuery {
            origin: "THR".to_string(),
            destination: "MHD".to_string(),
            departure_date: "2024-05-10".to_string(),
            adults: 2,
        }
    }

    #[test]
    fn test_extracts_minimum_nested_amount() {
        let body = r#"{"data": {"flights": [
            {"price": {"amount": 1500000}},
            {"price": {"amount": 1200000}},
            {"price": {"amount": 1350000}}
        ]}}"#;
        let price = provider("http://unused").extract_min_price(body).unwrap();
        assert_eq!(price, Some(1200000.0));
    }

    #[test]
    fn test_missing_or_empty_offers_yield_none() {
        let provider = provider("http://unused");
        for body in [
            r#"{}"#,
            r#"{"data": null}"#,
            r#"{"data": {}}"#,
            r#"{"data": {"flights": []}}"#,
        ] {
            assert_eq!(provider.extract_min_price(body).unwrap(), None, "{body}");
        }
    }

    #[test]
    fn test_flat_price_is_a_parse_error() {
        let body = r#"{"data": {"flights": [{"price": 1200000}]}}"#;
        assert!(matches!(
            provider("http://unused").extract_min_price(body),
            Err(ProviderError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_sends_search_parameters_and_browser_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/flights/search"))
            .and(query_param("origin", "THR"))
            .and(query_param("destination", "MHD"))
            .and(query_param("departureDate", "2024-05-10"))
            .and(query_param("adults", "2"))
            .and(query_param("children", "0"))
            .and(query_param("infants", "0"))
            .and(query_param("cabinClass", "Economy"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data": {"flights": [{"price": {"amount": 990000}}]}}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = provider(&format!("{}/api/v1/flights/search", mock_server.uri()));
        let price = provider
            .fetch_min_price(&reqwest::Client::new(), &query())
            .await
            .unwrap();
        assert_eq!(price, Some(990000.0));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].headers["user-agent"], BROWSER_USER_AGENT);
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let provider = provider(&format!("{}/api/v1/flights/search", mock_server.uri()));
        let result = provider
            .fetch_min_price(&reqwest::Client::new(), &query())
            .await;
        assert!(
            matches!(result, Err(ProviderError::Status(status)) if status.as_u16() == 503),
            "{result:?}"
        );
    }
}
