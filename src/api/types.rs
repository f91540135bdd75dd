//! Wire types for the backend endpoints

use serde::{Deserialize, Serialize};

/// One row returned by `GET /search-suggestions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSuggestion {
    pub title: String,
    pub artist: String,
}

impl SongSuggestion {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Text copied into the search input when this row is chosen
    pub fn display_text(&self) -> String {
        format!("{} - {}", self.title, self.artist)
    }
}

/// Body of a successful suggestion lookup
#[derive(Debug, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SongSuggestion>,
}

/// Song metadata sent to `POST /process_ajax` when publishing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishPayload {
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub audio: String,
}

/// Body of `POST /log_button_press`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ButtonPress {
    pub pressed: bool,
}

/// Reply of `POST /log_button_press`
#[derive(Debug, Deserialize)]
pub struct ButtonPressReply {
    pub message: String,
}
