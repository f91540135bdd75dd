//! Toggle button sharing the page with the upload form
//!
//! Each press flips the state and reports it to `/log_button_press`.

use crate::api::{ApiRequest, RequestSender};
use crate::error::FetchError;

pub const PRESSED_TEXT: &str = "You pressed the button!";

#[derive(Debug, Default)]
pub struct ButtonToggle {
    pressed: bool,
    request_tx: Option<RequestSender>,
}

impl ButtonToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channel(&mut self, request_tx: RequestSender) {
        self.request_tx = Some(request_tx);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Text shown next to the button
    pub fn text(&self) -> &'static str {
        if self.pressed { PRESSED_TEXT } else { "" }
    }

    /// Flip the state and report it; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.pressed = !self.pressed;

        if let Some(tx) = &self.request_tx
            && tx
                .send(ApiRequest::ButtonPress {
                    pressed: self.pressed,
                })
                .is_err()
        {
            log::warn!("Could not report button press: worker stopped");
        }
        self.pressed
    }

    /// Log the server's reply to a press
    pub fn handle_response(&self, result: &Result<String, FetchError>) {
        match result {
            Ok(message) => log::info!("Server response: {}", message),
            Err(e) => log::warn!("Button press not logged: {}", e),
        }
    }
}
