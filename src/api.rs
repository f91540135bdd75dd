//! Backend collaborator: HTTP client, wire types and the worker thread

pub mod client;
pub mod types;
pub mod worker;

pub use client::ApiClient;
pub use types::{PublishPayload, SongSuggestion};
pub use worker::{ApiRequest, ApiResponse, ApiWorker, RequestSender};
