//! Data types for the navigation client

pub mod geo;
pub mod route;
pub mod suggest;

// Re-export commonly used types
pub use geo::Coordinate;
pub use route::{RouteEntry, RouteResponse, RouteResult, RouteSection, RouteSummary, RouteSummaryView};
pub use suggest::{SuggestAddress, SuggestItem, SuggestResponse, SuggestState, Suggestion};
