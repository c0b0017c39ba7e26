use crate::core::{NormalizedQuery, ProviderError, ProviderRequest, ProviderSpec};
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

/// Some providers reject requests that do not look like they come from a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const CABIN_CLASS: &str = "Economy";

/// Builds the GET request every provider accepts: the search encoded as query
/// parameters on the provider's base URL.
///
/// Children and infants are always zero; all passengers are sent as adults.
pub fn search_request(
    spec: &ProviderSpec,
    query: &NormalizedQuery,
) -> Result<ProviderRequest, ProviderError> {
    let adults = query.adults.to_string();
    let url = Url::parse_with_params(
        &spec.base_url,
        &[
            ("origin", query.origin.as_str()),
            ("destination", query.destination.as_str()),
            ("departureDate", query.departure_date.as_str()),
            ("adults", adults.as_str()),
            ("children", "0"),
            ("infants", "0"),
            ("cabinClass", CABIN_CLASS),
        ],
    )
    .map_err(|e| ProviderError::InvalidUrl(format!("{}: {e}", spec.base_url)))?;

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

    Ok(ProviderRequest { url, headers })
}

/// A price field, either a bare number or wrapped in an object.
pub trait OfferPrice {
    fn value(&self) -> f64;
}

impl OfferPrice for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

#[derive(Debug, Deserialize)]
pub struct Amount {
    pub amount: f64,
}

impl OfferPrice for Amount {
    fn value(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Deserialize)]
pub struct Offer<P> {
    pub price: P,
}

/// The `{ "flights": [...] }` object every provider wraps its offers in.
#[derive(Debug, Deserialize)]
pub struct FlightList<P> {
    pub flights: Option<Vec<Offer<P>>>,
}

impl<P: OfferPrice> FlightList<P> {
    /// Lowest price across the offers, `None` when there are none.
    pub fn min_price(self) -> Option<f64> {
        self.flights?
            .iter()
            .map(|offer| offer.price.value())
            .reduce(f64::min)
    }
}
