//! Route result types and the routing wire shapes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Coordinate;

/// A computed driving route.
///
/// Created only by a successful route computation, replaced wholesale on
/// each new one, and cleared on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Ordered path from origin to destination, exactly as decoded from the
    /// provider's path encoding (no reordering, no deduplication).
    pub path: Vec<Coordinate>,
    /// Travel time in seconds.
    pub duration_seconds: f64,
    /// Route length in meters.
    pub length_meters: f64,
}

impl RouteResult {
    /// Derive the display summary for this route.
    ///
    /// Presentation values only; recomputed on every call rather than
    /// stored.
    pub fn summary(&self) -> RouteSummaryView {
        RouteSummaryView {
            minutes: (self.duration_seconds / 60.0).round() as i64,
            kilometers: format!("{:.2}", self.length_meters / 1000.0),
        }
    }
}

/// Display derivation of a [`RouteResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummaryView {
    /// Travel time rounded to whole minutes.
    pub minutes: i64,
    /// Length in kilometers, formatted with exactly two decimals.
    pub kilometers: String,
}

impl fmt::Display for RouteSummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duration ~ {} min, Distance ~ {} km.",
            self.minutes, self.kilometers
        )
    }
}

/// Wire shape of `/api/route` responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Candidate routes; only the first is consulted.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// A single route of a routing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route legs; duration, length and the path encoding come from the
    /// first one.
    #[serde(default)]
    pub sections: Vec<RouteSection>,
    /// Top-level path encoding, used when sections are absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
    /// Top-level summary, used when sections are absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<RouteSummary>,
}

/// One leg of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSection {
    /// Flexible-polyline encoding of this leg's path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
    /// Duration/length summary of this leg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<RouteSummary>,
}

/// Duration and length of a route or section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Length in meters.
    #[serde(default)]
    pub length: f64,
}
