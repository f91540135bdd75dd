//! Async HTTP client for the upload page backend

use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::types::{
    ButtonPress, ButtonPressReply, PublishPayload, SongSuggestion, SuggestionsResponse,
};
use crate::error::{FetchError, SongboardError};

pub const SEARCH_SUGGESTIONS_PATH: &str = "/search-suggestions";
pub const PROCESS_AJAX_PATH: &str = "/process_ajax";
pub const LOG_BUTTON_PRESS_PATH: &str = "/log_button_press";

/// Backend client
///
/// Cheap to clone; every clone shares the same connection pool. Each
/// request is bounded by the timeout given at construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SongboardError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(format!("songboard/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SongboardError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /search-suggestions?q=<query>`
    ///
    /// Only status 200 counts as success.
    pub async fn search_suggestions(
        &self,
        query: &str,
    ) -> Result<Vec<SongSuggestion>, FetchError> {
        let response = self
            .http
            .get(self.url(SEARCH_SUGGESTIONS_PATH))
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body: SuggestionsResponse = response.json().await?;
        Ok(body.suggestions)
    }

    /// `POST /process_ajax` with the song metadata; returns the echoed JSON
    pub async fn process_song(
        &self,
        payload: &PublishPayload,
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .http
            .post(self.url(PROCESS_AJAX_PATH))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// `POST /log_button_press`; returns the server's message
    pub async fn log_button_press(&self, pressed: bool) -> Result<String, FetchError> {
        let response = self
            .http
            .post(self.url(LOG_BUTTON_PRESS_PATH))
            .json(&ButtonPress { pressed })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let reply: ButtonPressReply = response.json().await?;
        Ok(reply.message)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
