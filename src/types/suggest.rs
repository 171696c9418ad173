//! Suggestion types and the autosuggest wire shapes

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// A candidate completion for a location query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable label, shown in the suggestion list and installed as
    /// the field text on pick.
    pub label: String,
    /// Resolved position, when the provider supplied one. A suggestion
    /// without a coordinate (for example a historical search term) needs a
    /// follow-up resolve step before it yields one.
    pub coordinate: Option<Coordinate>,
}

/// Observable state of a field's suggestion list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SuggestState {
    /// Nothing to render; no lookup pending.
    #[default]
    Idle,
    /// A suggestion request is in flight. The previous list may still be
    /// rendered but is about to be replaced.
    Loading,
    /// The latest completed lookup returned these items.
    Results(Vec<Suggestion>),
    /// The latest completed lookup returned zero items while the
    /// minimum-length gate was still met; render a "no results" affordance.
    Empty,
}

/// Wire shape of `/api/autosuggest` and `/api/geocode` responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Returned items, best match first.
    #[serde(default)]
    pub items: Vec<SuggestItem>,
}

/// A single item of a suggestion or geocoding response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestItem {
    /// Short display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Structured address, when the item is an address match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<SuggestAddress>,
    /// Geographic position, absent for query-term items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Coordinate>,
}

/// Address payload of a suggestion item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestAddress {
    /// Full formatted address label.
    pub label: String,
}

impl From<SuggestItem> for Suggestion {
    fn from(item: SuggestItem) -> Self {
        // Prefer the full address label, fall back to the title.
        let label = item
            .address
            .map(|a| a.label)
            .filter(|label| !label.is_empty())
            .or(item.title)
            .unwrap_or_default();
        Self {
            label,
            coordinate: item.position,
        }
    }
}
