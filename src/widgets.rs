//! Small layout and input helpers shared by the page components

pub mod popup;
pub mod textarea;
