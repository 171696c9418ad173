//! Route orchestrator
//!
//! Drives a single route computation from two resolved coordinates:
//! precondition check, one driving-mode request, path decoding, summary
//! extraction. Invocations supersede each other exactly like lookups do;
//! a superseded settlement (success or failure alike) is discarded.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::SearchProvider;
use crate::error::{NavError, Result, RouteError};
use crate::polyline;
use crate::types::{Coordinate, RouteResult};

/// Settlement of a route computation.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// The computation succeeded and its result is current.
    Computed(RouteResult),
    /// A newer computation started before this one settled; the result
    /// was discarded.
    Superseded,
}

/// Orchestrates route computations with latest-wins settlement.
pub struct RouteOrchestrator {
    provider: Arc<dyn SearchProvider>,
    generation: AtomicU64,
}

impl RouteOrchestrator {
    /// Create an orchestrator issuing route requests through `provider`.
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            generation: AtomicU64::new(0),
        }
    }

    /// Compute a driving route between two resolved endpoints.
    ///
    /// Fails with [`NavError::MissingEndpoint`] before any network access
    /// when either endpoint is absent. Failures are terminal for the
    /// attempt; there is no retry.
    pub async fn compute(
        &self,
        origin: Option<Coordinate>,
        destination: Option<Coordinate>,
    ) -> Result<RouteOutcome> {
        let (Some(origin), Some(destination)) = (origin, destination) else {
            return Err(NavError::MissingEndpoint);
        };

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(%origin, %destination, "requesting route");
        let outcome = self.provider.route(origin, destination).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!("route computation superseded");
            return Ok(RouteOutcome::Superseded);
        }

        let response = outcome.map_err(RouteError::from)?;
        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or(RouteError::NoRoute)?;

        // Duration, length and the path encoding come from the first
        // section, falling back to the route-level fields.
        let (encoded, summary) = match route.sections.into_iter().next() {
            Some(section) => (
                section.polyline.or(route.polyline),
                section.summary.or(route.summary),
            ),
            None => (route.polyline, route.summary),
        };
        let encoded = encoded.ok_or(RouteError::NoPath)?;
        let path = polyline::decode(&encoded).map_err(RouteError::from)?;
        let summary = summary.unwrap_or_default();

        Ok(RouteOutcome::Computed(RouteResult {
            path,
            duration_seconds: summary.duration,
            length_meters: summary.length,
        }))
    }

    /// Invalidate any in-flight computation so its settlement is
    /// discarded. Used on reset.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl fmt::Debug for RouteOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteOrchestrator")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
