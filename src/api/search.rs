use crate::api::AppState;
use crate::core::{Quote, SearchError, SearchQuery};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::debug;

/// Raw query string of `GET /api/search-flights`. Every field is optional
/// here so that missing ones are reported by name.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub passengers: Option<String>,
}

impl SearchParams {
    pub fn into_query(self) -> Result<SearchQuery, SearchError> {
        let origin = required(self.origin, "origin")?;
        let destination = required(self.destination, "destination")?;
        let date = required(self.date, "date")?;
        let passengers = required(self.passengers, "passengers")?;

        let passengers = passengers
            .parse::<u32>()
            .map_err(|_| SearchError::InvalidParameter {
                name: "passengers",
                reason: format!("'{passengers}' is not a positive integer"),
            })?;

        SearchQuery::new(origin, destination, date, passengers)
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, SearchError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(SearchError::MissingParameter(name))
}

/// GET /api/search-flights - lowest fare per provider
pub async fn search_flights(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Quote>>, SearchError> {
    let Query(params) =
        params.map_err(|rejection| SearchError::MalformedQuery(rejection.body_text()))?;
    debug!(?params, "Received flight search");

    let query = params.into_query()?.normalize()?;
    let quotes = state.engine.search(&query).await;

    Ok(Json(quotes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(origin: &str, destination: &str, date: &str, passengers: &str) -> SearchParams {
        SearchParams {
            origin: Some(origin.to_string()),
            destination: Some(destination.to_string()),
            date: Some(date.to_string()),
            passengers: Some(passengers.to_string()),
        }
    }

    #[test]
    fn test_complete_params_build_a_query() {
        let query = params("THR", " MHD ", "1403/05/10", "2").into_query().unwrap();
        assert_eq!(query, SearchQuery::new("THR", "MHD", "1403/05/10", 2).unwrap());
    }

    #[test]
    fn test_missing_params_are_reported_in_order() {
        let err = SearchParams::default().into_query().unwrap_err();
        assert!(matches!(err, SearchError::MissingParameter("origin")));

        let mut partial = params("THR", "MHD", "1403/05/10", "1");
        partial.date = None;
        assert!(matches!(
            partial.into_query(),
            Err(SearchError::MissingParameter("date"))
        ));

        let blank = params("THR", "   ", "1403/05/10", "1");
        assert!(matches!(
            blank.into_query(),
            Err(SearchError::MissingParameter("destination"))
        ));
    }

    #[test]
    fn test_passengers_must_be_a_positive_integer() {
        for passengers in ["0", "-1", "two", "1.5"] {
            let result = params("THR", "MHD", "1403/05/10", passengers).into_query();
            assert!(
                matches!(
                    result,
                    Err(SearchError::InvalidParameter {
                        name: "passengers",
                        ..
                    })
                ),
                "{passengers}: {result:?}"
            );
        }
    }
}
