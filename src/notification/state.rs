use std::time::{Duration, Instant};

/// How long a transient notification stays on screen
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Blocking notifications stay until dismissed and swallow other keys
    pub blocking: bool,
    shown_at: Instant,
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            current: None,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Show a transient notification
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            blocking: false,
            shown_at: now,
        });
    }

    /// Show a notification that stays until dismissed
    pub fn show_blocking(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            blocking: true,
            shown_at: Instant::now(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_blocking(&self) -> bool {
        self.current.as_ref().is_some_and(|n| n.blocking)
    }

    /// Drop a transient notification whose time is up
    pub fn expire(&mut self, now: Instant) {
        if let Some(notification) = &self.current
            && !notification.blocking
            && now.saturating_duration_since(notification.shown_at) >= self.duration
        {
            self.current = None;
        }
    }
}
