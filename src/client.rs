//! Menu server HTTP client.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::payload::{LocationsRequest, MenuPayload, MenuRequest, RouteIndex};

/// Route listing meals.
pub const MEALS_ROUTE: &str = "/meal";

/// Route listing locations serving a meal.
pub const LOCATIONS_ROUTE: &str = "/meal/location";

/// Route returning the menu for a meal at a location.
pub const MENU_ROUTE: &str = "/meal/location/menu";

/// Errors that can occur when talking to the menu server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An HTTP transport or decoding error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// HTTP client for the menu server.
#[derive(Debug, Clone)]
pub struct MenuClient {
    base_url: String,
    http: Client,
}

impl MenuClient {
    /// Create a client for the server at `base_url`, e.g. `"http://localhost:5000"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Server base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the meals being served.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn meals(&self) -> Result<RouteIndex, ClientError> {
        let response = self.http.get(self.url(MEALS_ROUTE)).send().await?;

        decode(response, MEALS_ROUTE).await
    }

    /// List the locations serving `meal`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn locations(&self, meal: &str) -> Result<RouteIndex, ClientError> {
        let body = LocationsRequest {
            meal: meal.to_string(),
        };

        let response = self
            .http
            .post(self.url(LOCATIONS_ROUTE))
            .json(&body)
            .send()
            .await?;

        decode(response, LOCATIONS_ROUTE).await
    }

    /// Fetch filters, menu and nutrition for a meal at a location.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn menu(&self, request: &MenuRequest) -> Result<MenuPayload, ClientError> {
        debug!(meal = %request.meal, location = %request.location, "requesting menu");

        let response = self
            .http
            .post(self.url(MENU_ROUTE))
            .json(request)
            .send()
            .await?;

        decode(response, MENU_ROUTE).await
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, route: &str) -> Result<T, ClientError> {
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        return Err(ClientError::UnexpectedResponse(format!(
            "{route} request failed with status {status}: {text}"
        )));
    }

    Ok(response.json().await?)
}
