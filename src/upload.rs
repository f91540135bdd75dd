//! Upload form with a completeness-gated publish action

pub mod upload_render;
pub mod upload_state;

pub use upload_state::{FormField, PUBLISHED_TEXT, PUBLISHING_TEXT, UploadForm};
