//! Location resolution and route planning client
//!
//! This crate provides the async control layer of a geocoding and routing
//! frontend: debounced autosuggest over a search proxy, coordinate-literal
//! parsing, suggestion and free-text resolution into coordinates, and
//! route computation with flexible-polyline path decoding. All network
//! operations follow latest-wins semantics; a superseded response never
//! reaches observable state.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use geonav_client::{Client, Endpoint, RoutePlanner};
//! # use geonav_client::{GeoLocator, MapSurface};
//! # fn surface() -> Arc<dyn MapSurface> { unimplemented!() }
//! # fn locator() -> Arc<dyn GeoLocator> { unimplemented!() }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client against the local search proxy
//!     let client = Client::builder()
//!         .endpoint(url::Url::parse("http://localhost:8787").unwrap())
//!         .build()?;
//!
//!     let planner = RoutePlanner::with_client(Arc::new(client), surface(), locator());
//!
//!     // Type into the origin field; suggestions arrive debounced
//!     planner.set_text(Endpoint::Origin, "Dizengoff 100");
//!     let mut suggestions = planner.field(Endpoint::Origin).suggestions();
//!     suggestions.changed().await?;
//!
//!     // Confirm both fields and compute
//!     planner.confirm(Endpoint::Origin).await?;
//!     planner.set_text(Endpoint::Destination, "32.0700,34.7900");
//!     planner.confirm(Endpoint::Destination).await?;
//!     planner.compute_route().await?;
//!     println!("{}", planner.summary_text());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod debounce;
pub mod error;
pub mod fetcher;
pub mod field;
pub mod http;
pub mod map;
pub mod planner;
pub mod polyline;
pub mod resolver;
pub mod route;
pub mod types;

// Re-export main types and traits
pub use client::{Client, ClientBuilder, ClientConfig, DEFAULT_BIAS, SearchProvider};
pub use error::{
    GeoError, LookupError, NavError, PolylineError, Result, RouteError, TransportError,
};
pub use fetcher::SuggestFetcher;
pub use field::{ConfirmOutcome, FieldController, FieldOptions, FieldPhase, ResolvedLocation};
pub use map::{GeoLocator, MapSurface, MarkerSlot};
pub use planner::{Endpoint, RoutePlanner};
pub use resolver::{ResolveInput, ResolveOutcome, Resolver};
pub use route::{RouteOrchestrator, RouteOutcome};
pub use types::{
    Coordinate, RouteResult, RouteSummaryView, SuggestState, Suggestion,
};

/// Get the version of this client library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
