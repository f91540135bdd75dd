//! songboard: a terminal music-upload page
//!
//! The page pairs a search box with debounced, race-safe song suggestions
//! and an upload form whose submissions land in a one-song catalog with a
//! star rating and a comment.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notification;
pub mod suggest;
pub mod toggle;
pub mod upload;
pub mod widgets;

#[cfg(test)]
mod test_utils;
