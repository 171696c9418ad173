//! Error types for the navigation client
//!
//! One variant per observable failure mode. Supersession of an in-flight
//! lookup is deliberately not represented here: a superseded completion is
//! discarded through the outcome enums of the resolver and the route
//! orchestrator and never surfaces as an error.

use thiserror::Error;

/// Main error type for the navigation client
#[derive(Error, Debug)]
pub enum NavError {
    /// Suggestion/geocode lookup errors
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Route computation errors
    #[error("routing error: {0}")]
    Route(#[from] RouteError),

    /// Route requested while an endpoint is unset; rejected before any
    /// network access
    #[error("origin and destination must both be set")]
    MissingEndpoint,

    /// Device geolocation errors
    #[error("geolocation error: {0}")]
    Geolocation(#[from] GeoError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors of the confirm-triggered resolve path
#[derive(Error, Debug)]
pub enum LookupError {
    /// Geocoding returned zero results for the confirmed text
    #[error("no matching location found")]
    NotFound,

    /// The lookup request itself failed
    #[error("lookup transport failure: {0}")]
    Transport(#[from] TransportError),
}

/// Route computation errors, each mapping to a distinct user-facing message
#[derive(Error, Debug)]
pub enum RouteError {
    /// The response carried no route at all
    #[error("no route found between the given points")]
    NoRoute,

    /// A route was present but carried no path encoding
    #[error("route response carried no path encoding")]
    NoPath,

    /// The routing request itself failed
    #[error("routing transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The path encoding could not be decoded
    #[error("malformed path encoding: {0}")]
    Polyline(#[from] PolylineError),
}

/// Transport-level failures shared by every proxy call
#[derive(Error, Debug)]
pub enum TransportError {
    /// The proxy answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The response body, as far as it could be read
        message: String,
    },

    /// The request could not be sent or the connection failed mid-flight
    #[error("request could not be completed")]
    Io(#[from] reqwest::Error),

    /// The response body was not the expected shape
    #[error("failed to decode response")]
    Decode {
        /// The source error
        #[source]
        source: serde_json::Error,
        /// The body that failed to decode
        body: String,
    },
}

/// Flexible-polyline decoding errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    /// A character outside the encoding alphabet
    #[error("invalid character {0:?} in encoding")]
    InvalidCharacter(char),

    /// The encoding ended inside a varint chunk or mid-point
    #[error("truncated encoding")]
    Truncated,

    /// A varint or delta sum exceeded the representable range
    #[error("value overflow in encoding")]
    Overflow,

    /// Unknown format version byte
    #[error("unsupported encoding version {0}")]
    UnsupportedVersion(u64),
}

/// Device geolocation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// The user denied the position request
    #[error("geolocation permission denied")]
    Denied,

    /// No position could be acquired
    #[error("geolocation unavailable: {0}")]
    Unavailable(String),
}
