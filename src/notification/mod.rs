//! Notification module for songboard
//!
//! Provides transient and blocking messages. Any component can raise one
//! through `App::notification`.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
