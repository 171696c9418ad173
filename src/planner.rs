//! Composition root: two fields, one orchestrator, one map surface
//!
//! Owns the origin and destination field controllers, the route
//! orchestrator, and the side effects the source of truth implies: marker
//! slots on the rendering surface, the bias hand-off from a resolved
//! origin to the destination fetcher, the tap-to-pick mode, and the
//! summary line that is replaced (never left stale) on every settlement.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

use crate::client::{Client, SearchProvider};
use crate::error::Result;
use crate::field::{ConfirmOutcome, FieldController, FieldOptions};
use crate::map::{GeoLocator, MapSurface, MarkerSlot};
use crate::route::{RouteOrchestrator, RouteOutcome};
use crate::types::{Coordinate, RouteResult, Suggestion};

/// Which endpoint of the route a call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The route origin
    Origin,
    /// The route destination
    Destination,
}

impl Endpoint {
    fn slot(self) -> MarkerSlot {
        match self {
            Endpoint::Origin => MarkerSlot::Origin,
            Endpoint::Destination => MarkerSlot::Destination,
        }
    }
}

/// Label installed when the origin comes from device geolocation.
const CURRENT_LOCATION_LABEL: &str = "Current location";

/// Summary text shown while a computation is in flight.
const CALCULATING: &str = "Calculating route...";

struct PlannerData {
    pick_armed: bool,
    last_route: Option<RouteResult>,
}

/// Top-level route planning controller.
pub struct RoutePlanner {
    origin: FieldController,
    destination: FieldController,
    orchestrator: RouteOrchestrator,
    surface: Arc<dyn MapSurface>,
    locator: Arc<dyn GeoLocator>,
    summary: watch::Sender<String>,
    data: Mutex<PlannerData>,
}

impl RoutePlanner {
    /// Create a planner over an arbitrary provider.
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        options: FieldOptions,
        surface: Arc<dyn MapSurface>,
        locator: Arc<dyn GeoLocator>,
    ) -> Self {
        let (summary, _) = watch::channel(String::new());
        Self {
            origin: FieldController::new(Arc::clone(&provider), options.clone()),
            destination: FieldController::new(Arc::clone(&provider), options),
            orchestrator: RouteOrchestrator::new(provider),
            surface,
            locator,
            summary,
            data: Mutex::new(PlannerData {
                pick_armed: false,
                last_route: None,
            }),
        }
    }

    /// Create a planner backed by a [`Client`], deriving the field options
    /// from its configuration.
    pub fn with_client(
        client: Arc<Client>,
        surface: Arc<dyn MapSurface>,
        locator: Arc<dyn GeoLocator>,
    ) -> Self {
        let config = client.config();
        let options = FieldOptions {
            debounce_window: config.debounce_window,
            min_query_len: config.min_query_len,
            bias: config.default_bias,
        };
        Self::new(client, options, surface, locator)
    }

    fn lock(&self) -> MutexGuard<'_, PlannerData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Access a field controller for reads (text, phase, suggestions).
    pub fn field(&self, endpoint: Endpoint) -> &FieldController {
        match endpoint {
            Endpoint::Origin => &self.origin,
            Endpoint::Destination => &self.destination,
        }
    }

    /// Feed new text into a field.
    pub fn set_text(&self, endpoint: Endpoint, text: &str) {
        self.field(endpoint).on_text_change(text);
    }

    /// Apply a suggestion pick on a field.
    pub async fn pick(&self, endpoint: Endpoint, suggestion: &Suggestion) -> Result<ConfirmOutcome> {
        let outcome = self.field(endpoint).on_pick(suggestion).await?;
        if let ConfirmOutcome::Resolved(coordinate) = outcome {
            self.apply_endpoint(endpoint, coordinate);
        }
        Ok(outcome)
    }

    /// Resolve a field's current text through the confirm fallback.
    pub async fn confirm(&self, endpoint: Endpoint) -> Result<ConfirmOutcome> {
        let outcome = self.field(endpoint).on_confirm().await?;
        if let ConfirmOutcome::Resolved(coordinate) = outcome {
            self.apply_endpoint(endpoint, coordinate);
        }
        Ok(outcome)
    }

    /// Install an externally produced coordinate on a field.
    pub fn set_endpoint(&self, endpoint: Endpoint, coordinate: Coordinate, label: Option<&str>) {
        self.field(endpoint).on_external_set(coordinate, label);
        self.apply_endpoint(endpoint, coordinate);
    }

    fn apply_endpoint(&self, endpoint: Endpoint, coordinate: Coordinate) {
        let label = self.field(endpoint).resolved().and_then(|r| r.label);
        self.surface
            .set_marker(endpoint.slot(), coordinate, label.as_deref());
        if endpoint == Endpoint::Origin {
            // Subsequent destination suggestions are biased around the
            // resolved origin.
            self.destination.set_bias(coordinate);
        }
    }

    /// Resolve the origin from device geolocation.
    pub async fn locate_origin(&self) -> Result<Coordinate> {
        let position = self.locator.current_position().await?;
        self.origin
            .on_external_set(position, Some(CURRENT_LOCATION_LABEL));
        self.apply_endpoint(Endpoint::Origin, position);
        Ok(position)
    }

    /// Arm or disarm the one-shot pick-destination-on-map mode.
    pub fn arm_destination_pick(&self, armed: bool) {
        self.lock().pick_armed = armed;
    }

    /// Whether a map tap will currently set the destination.
    pub fn destination_pick_armed(&self) -> bool {
        self.lock().pick_armed
    }

    /// Feed a map tap. Returns `true` when the tap was consumed as a
    /// destination pick; the mode disarms after one use.
    pub fn on_map_tap(&self, position: Coordinate) -> bool {
        {
            let mut data = self.lock();
            if !data.pick_armed {
                return false;
            }
            data.pick_armed = false;
        }
        self.set_endpoint(Endpoint::Destination, position, None);
        true
    }

    /// Compute a route between the currently installed endpoints.
    ///
    /// On success the path is drawn, the viewport fitted and the summary
    /// line replaced. On failure the summary line is replaced with the
    /// error text. A superseded settlement touches nothing.
    pub async fn compute_route(&self) -> Result<RouteOutcome> {
        self.summary.send_replace(CALCULATING.to_string());
        let outcome = self
            .orchestrator
            .compute(self.origin.coordinate(), self.destination.coordinate())
            .await;
        match outcome {
            Ok(RouteOutcome::Computed(result)) => {
                self.surface.draw_path(&result.path);
                self.surface.fit_viewport();
                self.summary.send_replace(result.summary().to_string());
                self.lock().last_route = Some(result.clone());
                Ok(RouteOutcome::Computed(result))
            }
            Ok(RouteOutcome::Superseded) => Ok(RouteOutcome::Superseded),
            Err(error) => {
                self.summary.send_replace(error.to_string());
                Err(error)
            }
        }
    }

    /// The most recent applied route, if any.
    pub fn route(&self) -> Option<RouteResult> {
        self.lock().last_route.clone()
    }

    /// Subscribe to summary line changes.
    pub fn summary(&self) -> watch::Receiver<String> {
        self.summary.subscribe()
    }

    /// Current summary line.
    pub fn summary_text(&self) -> String {
        self.summary.borrow().clone()
    }

    /// Clear both endpoints, the route and the summary.
    pub fn reset(&self) {
        self.origin.reset();
        self.destination.reset();
        self.orchestrator.cancel();
        {
            let mut data = self.lock();
            data.pick_armed = false;
            data.last_route = None;
        }
        self.surface.clear_slot(MarkerSlot::Origin);
        self.surface.clear_slot(MarkerSlot::Destination);
        self.surface.clear_slot(MarkerSlot::Route);
        self.summary.send_replace(String::new());
    }
}

impl fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("pick_armed", &self.lock().pick_armed)
            .finish_non_exhaustive()
    }
}
