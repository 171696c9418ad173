//! Main client implementation

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::error::{NavError, Result, TransportError};
use crate::http::HttpClient;
use crate::types::{Coordinate, RouteResponse, Suggestion};

/// Fallback bias coordinate used until an origin is resolved (Tel Aviv).
pub const DEFAULT_BIAS: Coordinate = Coordinate {
    lat: 32.0853,
    lng: 34.7818,
};

/// Lookup backend consumed by the fetcher, resolver and route orchestrator.
///
/// [`Client`] is the production implementation; tests substitute scripted
/// providers to exercise the cancellation and ordering guarantees without a
/// network.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetch at most `suggest_limit` suggestions for a partial query,
    /// biased around `at`.
    async fn suggest(&self, query: &str, at: Coordinate)
    -> std::result::Result<Vec<Suggestion>, TransportError>;

    /// Geocode free text; the first returned item is authoritative.
    async fn geocode(&self, query: &str) -> std::result::Result<Vec<Suggestion>, TransportError>;

    /// Request a driving route with "now" departure, returning the raw
    /// wire response.
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> std::result::Result<RouteResponse, TransportError>;
}

/// Configuration for the navigation client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the proxy holding the provider API key
    pub endpoint: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Language tag sent with suggestion and geocode lookups
    pub language: String,
    /// Maximum number of suggestions to request
    pub suggest_limit: u8,
    /// Quiet window before a suggestion fetch is issued
    pub debounce_window: Duration,
    /// Minimum trimmed query length that triggers a fetch
    pub min_query_len: usize,
    /// Bias coordinate used while no origin is resolved
    pub default_bias: Coordinate,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse("http://localhost:8787").unwrap(),
            timeout: Duration::from_secs(10),
            language: "he".to_string(),
            suggest_limit: 5,
            debounce_window: Duration::from_millis(250),
            min_query_len: 3,
            default_bias: DEFAULT_BIAS,
        }
    }
}

/// Builder for creating a configured navigation client
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new client builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the proxy base URL
    pub fn endpoint(mut self, url: Url) -> Self {
        self.config.endpoint = url;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the lookup language tag
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the maximum number of suggestions per fetch
    pub fn suggest_limit(mut self, limit: u8) -> Self {
        self.config.suggest_limit = limit;
        self
    }

    /// Set the debounce window for suggestion fetches
    pub fn debounce_window(mut self, window: Duration) -> Self {
        self.config.debounce_window = window;
        self
    }

    /// Set the minimum trimmed query length that triggers a fetch
    pub fn min_query_len(mut self, len: usize) -> Self {
        self.config.min_query_len = len;
        self
    }

    /// Set the bias coordinate used while no origin is resolved
    pub fn default_bias(mut self, bias: Coordinate) -> Self {
        self.config.default_bias = bias;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        Client::new(self.config)
    }
}

/// Main navigation client
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
    http: HttpClient,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        tracing::info!(endpoint = %config.endpoint, "creating navigation client");
        let http = HttpClient::new(config.clone())
            .map_err(|e| NavError::Configuration(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Create a client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl SearchProvider for Client {
    async fn suggest(
        &self,
        query: &str,
        at: Coordinate,
    ) -> std::result::Result<Vec<Suggestion>, TransportError> {
        self.http.autosuggest(query, at).await
    }

    async fn geocode(&self, query: &str) -> std::result::Result<Vec<Suggestion>, TransportError> {
        self.http.geocode(query).await
    }

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> std::result::Result<RouteResponse, TransportError> {
        self.http.route(origin, destination).await
    }
}
