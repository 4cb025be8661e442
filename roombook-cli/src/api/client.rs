//! Reqwest wrapper for the floors endpoint.

use anyhow::{Context, Result};

use super::models::Floor;
use super::query::FilterCriteria;

/// HTTP client for the RoomBook backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FloorsClient {
    http: reqwest::Client,
    base_url: String,
}

impl FloorsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch floors matching the given filters.
    ///
    /// Connect failures, non-2xx statuses and malformed payloads fold into a
    /// single error chain; callers only distinguish "request failed".
    pub async fn search_floors(&self, filters: &FilterCriteria) -> Result<Vec<Floor>> {
        let url = format!("{}/floors", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&filters.query_params())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?
            .error_for_status()
            .with_context(|| format!("GET {url} returned an error status"))?;

        response
            .json::<Vec<Floor>>()
            .await
            .with_context(|| format!("GET {url} returned a malformed payload"))
    }
}
