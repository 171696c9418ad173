//! Debounced suggestion fetcher
//!
//! Converts a burst of keystrokes into at most one in-flight suggestion
//! request reflecting only the most recent settled text. Supersession is a
//! monotonically increasing generation counter: a completion writes state
//! only while its generation is still current, so a stale response (or a
//! stale loading flag) can never clobber a newer one.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;

use crate::client::SearchProvider;
use crate::debounce::DebounceTimer;
use crate::types::{Coordinate, SuggestState};

/// Per-field debounced suggestion fetcher.
pub struct SuggestFetcher {
    provider: Arc<dyn SearchProvider>,
    window: Duration,
    min_query_len: usize,
    generation: Arc<AtomicU64>,
    timer: DebounceTimer,
    state: watch::Sender<SuggestState>,
}

impl SuggestFetcher {
    /// Create a fetcher issuing lookups through `provider`.
    pub fn new(provider: Arc<dyn SearchProvider>, window: Duration, min_query_len: usize) -> Self {
        let (state, _) = watch::channel(SuggestState::Idle);
        Self {
            provider,
            window,
            min_query_len,
            generation: Arc::new(AtomicU64::new(0)),
            timer: DebounceTimer::new(),
            state,
        }
    }

    /// Subscribe to suggestion state changes.
    pub fn subscribe(&self) -> watch::Receiver<SuggestState> {
        self.state.subscribe()
    }

    /// Current suggestion state.
    pub fn state(&self) -> SuggestState {
        self.state.borrow().clone()
    }

    /// Feed the field's current text.
    ///
    /// Returns `true` when a fetch was scheduled: the text is not a
    /// coordinate literal and its trimmed length meets the minimum-length
    /// gate. Otherwise any pending timer and in-flight request are
    /// dropped and the shown suggestions cleared.
    pub fn on_input(&self, text: &str, at: Coordinate) -> bool {
        if Coordinate::parse_literal(text).is_some() {
            self.dismiss();
            return false;
        }
        let trimmed = text.trim();
        if trimmed.chars().count() < self.min_query_len {
            self.dismiss();
            return false;
        }

        let query = trimmed.to_string();
        let provider = Arc::clone(&self.provider);
        let generation = Arc::clone(&self.generation);
        let state = self.state.clone();
        self.timer.arm(self.window, async move {
            // Firing supersedes whatever is still in flight.
            let ticket = generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.send_replace(SuggestState::Loading);

            let outcome = provider.suggest(&query, at).await;
            if generation.load(Ordering::SeqCst) != ticket {
                tracing::debug!(%query, "suggestion lookup superseded");
                return;
            }
            let next = match outcome {
                Ok(items) if items.is_empty() => SuggestState::Empty,
                Ok(items) => SuggestState::Results(items),
                Err(error) => {
                    // Lookup failures render the same as zero results.
                    tracing::debug!(%query, %error, "suggestion lookup failed");
                    SuggestState::Empty
                }
            };
            state.send_replace(next);
        });
        true
    }

    /// Drop any pending timer and in-flight request and clear the shown
    /// suggestions. Used on pick, reset, and non-qualifying input.
    pub fn dismiss(&self) {
        self.timer.cancel();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(SuggestState::Idle);
    }
}

impl fmt::Debug for SuggestFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestFetcher")
            .field("window", &self.window)
            .field("min_query_len", &self.min_query_len)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
