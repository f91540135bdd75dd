//! Uploaded-song catalog with ratings and comments

pub mod catalog_render;
pub mod catalog_state;
pub mod song;

pub use catalog_render::CardFocus;
pub use catalog_state::{CatalogController, CatalogState, SongCard};
pub use song::{MAX_RATING, SongId, SongRecord};
