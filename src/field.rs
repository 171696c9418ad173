//! Per-field controller for the origin and destination inputs
//!
//! Composes the literal parser, the debounced fetcher and the resolver
//! into the editable-field contract: `Empty → Typing → Suggesting →
//! Resolved`, where `Resolved` is only reached through an explicit pick,
//! an external set (geolocation or map tap), or a successful
//! confirm-resolve. Editing a resolved field does not clear its
//! coordinate; only a reset or a new successful resolution replaces it.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

use crate::client::{DEFAULT_BIAS, SearchProvider};
use crate::error::{NavError, Result};
use crate::fetcher::SuggestFetcher;
use crate::resolver::{ResolveInput, ResolveOutcome, Resolver};
use crate::types::{Coordinate, SuggestState, Suggestion};

/// Tuning knobs for a field controller.
#[derive(Debug, Clone)]
pub struct FieldOptions {
    /// Quiet window before a suggestion fetch is issued.
    pub debounce_window: Duration,
    /// Minimum trimmed query length that triggers a fetch.
    pub min_query_len: usize,
    /// Bias coordinate used until the planner installs a resolved origin.
    pub bias: Coordinate,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(250),
            min_query_len: 3,
            bias: DEFAULT_BIAS,
        }
    }
}

/// Lifecycle phase of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    /// No text entered.
    Empty,
    /// Text present but not eligible for suggestions.
    Typing,
    /// A qualifying query; suggestions pending or shown.
    Suggesting,
    /// A coordinate is installed for this field.
    Resolved,
}

/// A coordinate installed on a field, with its display label when known.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// The resolved position.
    pub coordinate: Coordinate,
    /// Label shown for the position, when one exists.
    pub label: Option<String>,
}

/// Settlement of a pick or confirm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmOutcome {
    /// The field resolved to this coordinate.
    Resolved(Coordinate),
    /// A newer operation superseded this one; nothing was applied.
    Superseded,
    /// The query was blank; nothing to resolve.
    Ignored,
}

struct FieldData {
    query: String,
    resolved: Option<ResolvedLocation>,
    phase: FieldPhase,
    bias: Coordinate,
}

/// Controller for one endpoint field.
pub struct FieldController {
    fetcher: SuggestFetcher,
    resolver: Resolver,
    home_bias: Coordinate,
    data: Mutex<FieldData>,
}

impl FieldController {
    /// Create a field controller backed by `provider`.
    pub fn new(provider: Arc<dyn SearchProvider>, options: FieldOptions) -> Self {
        let fetcher = SuggestFetcher::new(
            Arc::clone(&provider),
            options.debounce_window,
            options.min_query_len,
        );
        Self {
            fetcher,
            resolver: Resolver::new(provider),
            home_bias: options.bias,
            data: Mutex::new(FieldData {
                query: String::new(),
                resolved: None,
                phase: FieldPhase::Empty,
                bias: options.bias,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FieldData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Feed a keystroke's worth of new field text.
    pub fn on_text_change(&self, text: &str) {
        let bias = {
            let mut data = self.lock();
            data.query = text.to_string();
            data.bias
        };
        let scheduled = self.fetcher.on_input(text, bias);
        let mut data = self.lock();
        data.phase = if text.trim().is_empty() {
            FieldPhase::Empty
        } else if scheduled {
            FieldPhase::Suggesting
        } else {
            FieldPhase::Typing
        };
    }

    /// Apply an explicit suggestion pick.
    ///
    /// A suggestion with a coordinate resolves immediately; one without
    /// installs its label as the query and resolves through the geocode
    /// fallback.
    pub async fn on_pick(&self, suggestion: &Suggestion) -> Result<ConfirmOutcome> {
        self.lock().query = suggestion.label.clone();
        self.fetcher.dismiss();
        match self.resolver.resolve(ResolveInput::Suggestion(suggestion)).await {
            Ok(ResolveOutcome::Resolved(coordinate)) => {
                self.install(coordinate, Some(suggestion.label.clone()));
                Ok(ConfirmOutcome::Resolved(coordinate))
            }
            Ok(ResolveOutcome::Superseded) => Ok(ConfirmOutcome::Superseded),
            Err(error) => Err(NavError::Lookup(error)),
        }
    }

    /// Resolve the current text through the fallback path (literal parse,
    /// then one geocode lookup). On failure the previously installed
    /// coordinate is left untouched.
    pub async fn on_confirm(&self) -> Result<ConfirmOutcome> {
        let text = self.lock().query.trim().to_string();
        if text.is_empty() {
            return Ok(ConfirmOutcome::Ignored);
        }
        self.fetcher.dismiss();
        match self.resolver.resolve(ResolveInput::Text(&text)).await {
            Ok(ResolveOutcome::Resolved(coordinate)) => {
                self.install(coordinate, Some(text));
                Ok(ConfirmOutcome::Resolved(coordinate))
            }
            Ok(ResolveOutcome::Superseded) => Ok(ConfirmOutcome::Superseded),
            Err(error) => Err(NavError::Lookup(error)),
        }
    }

    /// Install a coordinate produced outside the field (geolocation or a
    /// map tap).
    pub fn on_external_set(&self, coordinate: Coordinate, label: Option<&str>) {
        self.fetcher.dismiss();
        self.resolver.cancel();
        self.install(coordinate, label.map(str::to_string));
    }

    /// Clear the field back to its initial state.
    pub fn reset(&self) {
        self.fetcher.dismiss();
        self.resolver.cancel();
        let mut data = self.lock();
        data.query.clear();
        data.resolved = None;
        data.phase = FieldPhase::Empty;
        data.bias = self.home_bias;
    }

    fn install(&self, coordinate: Coordinate, label: Option<String>) {
        let mut data = self.lock();
        data.query = label.clone().unwrap_or_else(|| coordinate.to_string());
        data.resolved = Some(ResolvedLocation { coordinate, label });
        data.phase = FieldPhase::Resolved;
    }

    /// Update the bias coordinate used for subsequent suggestion fetches.
    pub fn set_bias(&self, bias: Coordinate) {
        self.lock().bias = bias;
    }

    /// Current field text.
    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FieldPhase {
        self.lock().phase
    }

    /// The installed coordinate, if any.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.lock().resolved.as_ref().map(|r| r.coordinate)
    }

    /// The installed coordinate with its label, if any.
    pub fn resolved(&self) -> Option<ResolvedLocation> {
        self.lock().resolved.clone()
    }

    /// Subscribe to suggestion state changes.
    pub fn suggestions(&self) -> watch::Receiver<SuggestState> {
        self.fetcher.subscribe()
    }

    /// Current suggestion state.
    pub fn suggest_state(&self) -> SuggestState {
        self.fetcher.state()
    }
}

impl fmt::Debug for FieldController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.lock();
        f.debug_struct("FieldController")
            .field("query", &data.query)
            .field("phase", &data.phase)
            .field("resolved", &data.resolved)
            .finish_non_exhaustive()
    }
}
