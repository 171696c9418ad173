//! Collaborator traits for the rendering surface and device geolocation
//!
//! The controller core never manages map lifecycle; it only addresses named
//! drawable slots on whatever surface the embedding application provides.

use async_trait::async_trait;

use crate::error::GeoError;
use crate::types::Coordinate;

/// Stable keys for the drawables the controller owns on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSlot {
    /// The origin marker
    Origin,
    /// The destination marker
    Destination,
    /// The route path
    Route,
}

/// Rendering surface contract consumed by the controller core.
///
/// Implementations are expected to replace the previous content of a slot
/// on every call; the core never tracks individual drawable handles.
pub trait MapSurface: Send + Sync {
    /// Place or replace the marker in `slot`.
    fn set_marker(&self, slot: MarkerSlot, position: Coordinate, label: Option<&str>);

    /// Remove whatever currently occupies `slot`.
    fn clear_slot(&self, slot: MarkerSlot);

    /// Replace the route path with `path`, drawn as a single visible line.
    fn draw_path(&self, path: &[Coordinate]);

    /// Fit the viewport to the currently occupied slots.
    fn fit_viewport(&self);
}

/// Device geolocation contract.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Read the current device position.
    async fn current_position(&self) -> Result<Coordinate, GeoError>;
}
