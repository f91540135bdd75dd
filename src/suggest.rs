//! Incremental song suggestions
//!
//! Debounced, race-safe lookups against the suggestion endpoint.

pub mod debouncer;
pub mod suggest_render;
pub mod suggest_state;

pub use debouncer::Debouncer;
pub use suggest_state::{SuggestionController, SuggestionView};
