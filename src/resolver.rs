//! Resolver: confirmed input → coordinate
//!
//! Turns a picked suggestion or confirmed free text into a single
//! coordinate. A suggestion already carrying a coordinate resolves without
//! a network call; free text tries the literal parser first and falls back
//! to one geocode lookup. The fallback runs only on an explicit confirm,
//! never per keystroke.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::SearchProvider;
use crate::error::LookupError;
use crate::types::{Coordinate, Suggestion};

/// Input to a resolve call.
#[derive(Debug, Clone, Copy)]
pub enum ResolveInput<'a> {
    /// An explicitly picked suggestion.
    Suggestion(&'a Suggestion),
    /// Confirmed free text.
    Text(&'a str),
}

/// Settlement of a resolve call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolveOutcome {
    /// The input resolved to this coordinate.
    Resolved(Coordinate),
    /// A newer resolve for the same field started before this one
    /// settled; the result was discarded.
    Superseded,
}

/// Per-field resolver with single-flight supersession.
pub struct Resolver {
    provider: Arc<dyn SearchProvider>,
    generation: AtomicU64,
}

impl Resolver {
    /// Create a resolver issuing geocode lookups through `provider`.
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve a picked suggestion or confirmed text into a coordinate.
    pub async fn resolve(&self, input: ResolveInput<'_>) -> Result<ResolveOutcome, LookupError> {
        let text = match input {
            ResolveInput::Suggestion(suggestion) => {
                if let Some(coordinate) = suggestion.coordinate {
                    // Direct hit; still invalidate any older in-flight resolve.
                    self.cancel();
                    return Ok(ResolveOutcome::Resolved(coordinate));
                }
                suggestion.label.as_str()
            }
            ResolveInput::Text(text) => text,
        };

        if let Some(coordinate) = Coordinate::parse_literal(text) {
            self.cancel();
            return Ok(ResolveOutcome::Resolved(coordinate));
        }

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.provider.geocode(text).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(query = %text, "resolve superseded");
            return Ok(ResolveOutcome::Superseded);
        }

        let items = outcome?;
        match items.first().and_then(|item| item.coordinate) {
            Some(coordinate) => Ok(ResolveOutcome::Resolved(coordinate)),
            None => Err(LookupError::NotFound),
        }
    }

    /// Invalidate any in-flight resolve so its settlement is discarded.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
