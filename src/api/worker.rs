//! API Worker Thread
//!
//! Runs backend calls off the UI thread. Requests arrive over an unbounded
//! channel; each one is spawned as its own task on a single-threaded tokio
//! runtime, so responses come back in completion order, not request order.
//! Responses are sent over a std channel that the UI loop drains without
//! blocking.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::client::ApiClient;
use super::types::{PublishPayload, SongSuggestion};
use crate::error::FetchError;

/// Request messages sent to the API worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Look up suggestions for the given text
    Suggest {
        query: String,
        /// Sequence number of the lookup, echoed back in the response
        seq: u64,
    },
    /// Send song metadata to the publish endpoint
    Publish { payload: PublishPayload },
    /// Report the toggle button state
    ButtonPress { pressed: bool },
}

/// Response messages received from the API worker thread
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Suggestions {
        seq: u64,
        result: Result<Vec<SongSuggestion>, FetchError>,
    },
    Published {
        result: Result<serde_json::Value, FetchError>,
    },
    ButtonPressLogged {
        result: Result<String, FetchError>,
    },
}

/// Sending half handed to the controllers
pub type RequestSender = UnboundedSender<ApiRequest>;

/// Handle to the running worker thread
///
/// Dropping the handle cancels the worker and joins its thread.
pub struct ApiWorker {
    request_tx: RequestSender,
    response_rx: Receiver<ApiResponse>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ApiWorker {
    /// Spawn the worker thread for `client`
    pub fn spawn(client: ApiClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        let handle = std::thread::Builder::new()
            .name("songboard-api".to_string())
            .spawn(move || {
                runtime.block_on(worker_loop(client, request_rx, response_tx, worker_cancel));
            })?;

        Ok(Self {
            request_tx,
            response_rx,
            cancel,
            handle: Some(handle),
        })
    }

    /// A sender for submitting requests to this worker
    pub fn sender(&self) -> RequestSender {
        self.request_tx.clone()
    }

    /// Take the next response if one is ready
    pub fn try_recv(&self) -> Option<ApiResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next response
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ApiResponse> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Stop the worker and wait for its thread to exit
    ///
    /// Requests still in flight are dropped without a response.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("API worker thread panicked");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ApiWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Main worker loop - spawns a task per request until cancelled or the
/// request channel is closed
async fn worker_loop(
    client: ApiClient,
    mut request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                log::debug!("API worker cancelled");
                break;
            }
            request = request_rx.recv() => {
                let Some(request) = request else {
                    break;
                };
                let client = client.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = handle_request(&client, request).await;
                    if response_tx.send(response).is_err() {
                        // UI side is gone, nothing left to deliver to
                        log::debug!("Dropping API response: receiver disconnected");
                    }
                });
            }
        }
    }

    log::debug!("API worker thread shutting down");
}

async fn handle_request(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Suggest { query, seq } => {
            log::debug!("Suggestion lookup #{} for {:?}", seq, query);
            let result = client.search_suggestions(&query).await;
            ApiResponse::Suggestions { seq, result }
        }
        ApiRequest::Publish { payload } => {
            let result = client.process_song(&payload).await;
            ApiResponse::Published { result }
        }
        ApiRequest::ButtonPress { pressed } => {
            let result = client.log_button_press(pressed).await;
            ApiResponse::ButtonPressLogged { result }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
