//! HTTP client for TheMealDB search API.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::meal::{Meal, MealError};

/// Base URL of the free TheMealDB API tier.
pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";

/// Outcome of one search: the ordered records, or an explicit empty marker.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<Meal>),
    NoMatches,
}

/// Response envelope for `search.php` and `random.php`.
///
/// The API signals "no matches" as `{"meals": null}`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    meals: Option<Vec<Value>>,
}

#[derive(Debug, Clone)]
pub struct MealClient {
    api_base: String,
    client: Client,
}

impl MealClient {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            api_base,
            client: Client::new(),
        }
    }

    /// Searches meals by name. The query is URL-encoded by reqwest.
    ///
    /// # Errors
    ///
    /// Returns `MealError::Network` on transport or body-decoding failure and
    /// `MealError::Parse` if the body is not shaped like a meal listing.
    pub async fn search_meals(&self, query: &str) -> Result<SearchOutcome, MealError> {
        let url = format!("{}/search.php", self.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[("s", query)])
            .header("accept", "application/json")
            .send()
            .await?;

        let body: SearchResponse = response.json().await?;
        Self::outcome_from_response(body)
    }

    /// Fetches a single random meal as a one-element result set.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::search_meals`].
    pub async fn random_meal(&self) -> Result<SearchOutcome, MealError> {
        let url = format!("{}/random.php", self.api_base);
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        let body: SearchResponse = response.json().await?;
        Self::outcome_from_response(body)
    }

    fn outcome_from_response(response: SearchResponse) -> Result<SearchOutcome, MealError> {
        let Some(entries) = response.meals else {
            return Ok(SearchOutcome::NoMatches);
        };
        if entries.is_empty() {
            return Ok(SearchOutcome::NoMatches);
        }

        // Order is preserved verbatim; no sorting, filtering or deduplication.
        let meals = entries
            .iter()
            .map(Meal::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SearchOutcome::Found(meals))
    }
}
