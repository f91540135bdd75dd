//! Suggestion controller state
//!
//! Turns keystrokes into debounced lookups and reconciles their responses.
//! Every fired lookup gets a sequence number; a response is applied only
//! when its number is the one still awaited, so late answers to superseded
//! or cleared lookups are dropped instead of cancelled.

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use crate::api::{ApiRequest, RequestSender, SongSuggestion};
use crate::error::FetchError;

/// What the suggestion surface currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionView {
    /// Nothing to show; the popup is closed
    #[default]
    Hidden,
    /// A lookup has fired and no answer has been applied yet
    Loading,
    /// Matching songs, in server order
    Results(Vec<SongSuggestion>),
    /// The lookup succeeded with an empty list
    NoMatches,
    /// The lookup failed (transport, timeout, status or body)
    Failed,
}

pub struct SuggestionController {
    /// Text currently in the search input
    query: String,
    debouncer: Debouncer,
    view: SuggestionView,
    /// Number of lookups fired so far; the latest lookup's sequence number
    fired: u64,
    /// Sequence number whose response may still be applied
    awaiting: Option<u64>,
    /// Highlighted row within `SuggestionView::Results`
    selected: usize,
    request_tx: Option<RequestSender>,
}

impl SuggestionController {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            query: String::new(),
            debouncer: Debouncer::new(debounce_ms),
            view: SuggestionView::Hidden,
            fired: 0,
            awaiting: None,
            selected: 0,
            request_tx: None,
        }
    }

    /// Attach the channel lookups are sent on
    pub fn set_channel(&mut self, request_tx: RequestSender) {
        self.request_tx = Some(request_tx);
    }

    /// Detach from the worker and drop all transient state
    pub fn teardown(&mut self) {
        self.clear();
        self.request_tx = None;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &SuggestionView {
        &self.view
    }

    pub fn is_visible(&self) -> bool {
        self.view != SuggestionView::Hidden
    }

    /// Sequence number of the most recently fired lookup (0 before any)
    pub fn latest_seq(&self) -> u64 {
        self.fired
    }

    /// Whether a fired lookup's response would still be applied
    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Whether a lookup is armed but has not fired yet
    pub fn has_pending_lookup(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Time until the armed lookup fires, if one is armed
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_remaining(now)
    }

    /// Keystroke handler
    pub fn on_input_changed(&mut self, text: &str) {
        self.on_input_changed_at(text, Instant::now());
    }

    /// Keystroke handler with an explicit clock
    ///
    /// Empty (or whitespace-only) text clears the surface at once and
    /// leaves nothing armed; anything else re-arms the quiet interval.
    pub fn on_input_changed_at(&mut self, text: &str, now: Instant) {
        self.debouncer.cancel();
        self.query = text.to_string();

        if text.trim().is_empty() {
            self.clear();
            return;
        }

        self.debouncer.schedule_at(now);
    }

    /// Fire the armed lookup if its quiet interval has elapsed
    ///
    /// Returns true when a lookup fired.
    pub fn poll_debounce(&mut self, now: Instant) -> bool {
        if !self.debouncer.take_if_due(now) {
            return false;
        }

        let text = self.query.trim().to_string();
        if text.is_empty() {
            return false;
        }
        self.fire_request(&text);
        true
    }

    /// Issue a lookup for `text` and show the loading state
    ///
    /// Returns the sequence number assigned to the lookup.
    pub fn fire_request(&mut self, text: &str) -> u64 {
        self.fired += 1;
        let seq = self.fired;
        self.awaiting = Some(seq);
        self.view = SuggestionView::Loading;
        self.selected = 0;

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(ApiRequest::Suggest {
                query: text.to_string(),
                seq,
            })
            .is_ok()
        });

        if !sent {
            self.handle_response(seq, Err(FetchError::Unavailable));
        }
        seq
    }

    /// Apply a lookup result if `seq` is still the awaited lookup
    ///
    /// Returns true if the surface changed.
    pub fn handle_response(
        &mut self,
        seq: u64,
        result: Result<Vec<SongSuggestion>, FetchError>,
    ) -> bool {
        if self.awaiting != Some(seq) {
            log::debug!(
                "Discarding stale suggestions #{} (latest #{})",
                seq,
                self.fired
            );
            return false;
        }

        self.awaiting = None;
        self.selected = 0;
        self.view = match result {
            Ok(rows) if rows.is_empty() => SuggestionView::NoMatches,
            Ok(rows) => SuggestionView::Results(rows),
            Err(e) => {
                log::warn!("Suggestion lookup #{} failed: {}", seq, e);
                SuggestionView::Failed
            }
        };
        true
    }

    /// Choose the row at `index`
    ///
    /// Copies its display text into the input and closes the surface
    /// without arming a new lookup. Returns the new input text.
    pub fn on_suggestion_selected(&mut self, index: usize) -> Option<String> {
        let SuggestionView::Results(rows) = &self.view else {
            return None;
        };
        let text = rows.get(index)?.display_text();

        self.query = text.clone();
        self.clear();
        Some(text)
    }

    /// Choose the highlighted row
    pub fn accept_selected(&mut self) -> Option<String> {
        self.on_suggestion_selected(self.selected)
    }

    /// Close the surface and forget anything armed or in flight
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.view = SuggestionView::Hidden;
        self.awaiting = None;
        self.selected = 0;
    }

    pub fn suggestions(&self) -> &[SongSuggestion] {
        match &self.view {
            SuggestionView::Results(rows) => rows,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_suggestion(&self) -> Option<&SongSuggestion> {
        self.suggestions().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.suggestions().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.suggestions().len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }
}

impl Default for SuggestionController {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
