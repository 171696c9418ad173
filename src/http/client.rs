//! HTTP client implementation
//!
//! Raw REST calls against the proxy that fronts the geocoding, autosuggest
//! and routing provider. The proxy owns the API key; this client only
//! speaks its three GET endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::ClientConfig;
use crate::error::TransportError;
use crate::types::{Coordinate, RouteResponse, SuggestResponse, Suggestion};

/// HTTP client for proxy requests
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TransportError::Io)?;

        Ok(Self { client, config })
    }

    /// Issue a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let mut url = self.config.endpoint.clone();
        url.set_path(path);
        tracing::trace!(%url, ?query, "proxy request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(TransportError::Io)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(TransportError::Io)?;
        tracing::trace!(%body, "proxy response");

        serde_json::from_str(&body).map_err(|source| TransportError::Decode { source, body })
    }

    /// Fetch suggestions for a partial query, biased around `at`.
    pub async fn autosuggest(
        &self,
        query: &str,
        at: Coordinate,
    ) -> Result<Vec<Suggestion>, TransportError> {
        let response: SuggestResponse = self
            .get_json(
                "/api/autosuggest",
                &[
                    ("q", query.to_string()),
                    ("at", at.to_string()),
                    ("limit", self.config.suggest_limit.to_string()),
                    ("lang", self.config.language.clone()),
                ],
            )
            .await?;
        Ok(response.items.into_iter().map(Suggestion::from).collect())
    }

    /// Geocode a full address; the first returned item is authoritative.
    pub async fn geocode(&self, query: &str) -> Result<Vec<Suggestion>, TransportError> {
        let response: SuggestResponse = self
            .get_json(
                "/api/geocode",
                &[
                    ("q", query.to_string()),
                    ("lang", self.config.language.clone()),
                ],
            )
            .await?;
        Ok(response.items.into_iter().map(Suggestion::from).collect())
    }

    /// Request a driving route, returning the raw wire response. Path
    /// decoding and summary extraction belong to the orchestrator.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteResponse, TransportError> {
        self.get_json(
            "/api/route",
            &[
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
            ],
        )
        .await
    }
}
