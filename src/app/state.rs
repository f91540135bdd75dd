use std::time::Instant;

use tui_textarea::TextArea;

use crate::api::{ApiRequest, ApiResponse, ApiWorker, RequestSender};
use crate::catalog::{CardFocus, CatalogController};
use crate::config::Config;
use crate::error::{FetchError, UploadError};
use crate::notification::{NotificationKind, NotificationState};
use crate::suggest::SuggestionController;
use crate::toggle::ButtonToggle;
use crate::upload::{FormField, PUBLISHED_TEXT, UploadForm};
use crate::widgets::textarea::{create_single_line_textarea, textarea_text};

/// Which widget has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Form(FormField),
    Rating,
    Comment,
}

impl Focus {
    /// Tab order; the card widgets only take part once a song exists
    fn cycle(has_song: bool) -> Vec<Focus> {
        let mut order = vec![Focus::Search];
        order.extend(FormField::ALL.into_iter().map(Focus::Form));
        if has_song {
            order.push(Focus::Rating);
            order.push(Focus::Comment);
        }
        order
    }

    pub fn card_focus(&self) -> CardFocus {
        match self {
            Focus::Rating => CardFocus::Rating,
            Focus::Comment => CardFocus::Comment,
            _ => CardFocus::None,
        }
    }
}

/// Application state
pub struct App {
    pub search: TextArea<'static>,
    pub suggest: SuggestionController,
    pub form: UploadForm,
    pub catalog: CatalogController,
    /// Edit buffer for the current song's comment
    pub comment: TextArea<'static>,
    pub toggle: ButtonToggle,
    pub notification: NotificationState,
    pub focus: Focus,
    pub should_quit: bool,
    pub max_visible: usize,
    request_tx: Option<RequestSender>,
    worker: Option<ApiWorker>,
}

impl App {
    /// Create an App without a backend connection
    pub fn new(config: &Config) -> Self {
        Self {
            search: create_single_line_textarea(),
            suggest: SuggestionController::new(config.suggestions.debounce_ms),
            form: UploadForm::new(),
            catalog: CatalogController::new(),
            comment: create_single_line_textarea(),
            toggle: ButtonToggle::new(),
            notification: NotificationState::new(),
            focus: Focus::Search,
            should_quit: false,
            max_visible: config.suggestions.max_visible,
            request_tx: None,
            worker: None,
        }
    }

    /// Create an App backed by a running worker
    pub fn with_worker(config: &Config, worker: ApiWorker) -> Self {
        let mut app = Self::new(config);
        app.connect(worker.sender());
        app.worker = Some(worker);
        app
    }

    /// Hand the request channel to every component that talks to the backend
    pub fn connect(&mut self, request_tx: RequestSender) {
        self.suggest.set_channel(request_tx.clone());
        self.toggle.set_channel(request_tx.clone());
        self.request_tx = Some(request_tx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn search_text(&self) -> &str {
        textarea_text(&self.search)
    }

    /// Replace the search input text without arming a lookup
    pub fn set_search_text(&mut self, text: &str) {
        self.search = create_single_line_textarea();
        self.search.insert_str(text);
    }

    /// Advance timers and apply any backend responses that arrived
    pub fn tick(&mut self, now: Instant) {
        self.suggest.poll_debounce(now);

        while let Some(response) = self.worker.as_ref().and_then(ApiWorker::try_recv) {
            self.handle_api_response(response);
        }

        self.notification.expire(now);
    }

    /// Route one backend response to its owner
    pub fn handle_api_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Suggestions { seq, result } => {
                self.suggest.handle_response(seq, result);
            }
            ApiResponse::Published { result } => {
                self.form.finish_publish(&result);
                match result {
                    Ok(_) => self.notification.show(PUBLISHED_TEXT, NotificationKind::Info),
                    Err(e) => self
                        .notification
                        .show_blocking(format!("Publish failed: {}", e), NotificationKind::Error),
                }
            }
            ApiResponse::ButtonPressLogged { result } => {
                self.toggle.handle_response(&result);
            }
        }
    }

    /// Add the form's title and artist to the catalog
    pub fn submit_song(&mut self) {
        let title = self.form.value(FormField::Title).to_string();
        let artist = self.form.value(FormField::Artist).to_string();

        match self.catalog.submit(&title, &artist) {
            Ok(id) => {
                log::info!("Song {} added to catalog", id);
                self.comment = create_single_line_textarea();
            }
            Err(e) => self
                .notification
                .show_blocking(e.to_string(), NotificationKind::Error),
        }
    }

    /// Send the form to the publish endpoint if it is complete
    pub fn publish(&mut self) {
        let payload = match self.form.begin_publish() {
            Ok(payload) => payload,
            Err(e @ UploadError::AlreadyPublishing) => {
                self.notification.show(e.to_string(), NotificationKind::Warning);
                return;
            }
            Err(e) => {
                self.notification
                    .show_blocking(e.to_string(), NotificationKind::Error);
                return;
            }
        };

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::Publish { payload }).is_ok());

        if !sent {
            self.handle_api_response(ApiResponse::Published {
                result: Err(FetchError::Unavailable),
            });
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = Focus::cycle(self.catalog.current().is_some());
        let len = order.len() as isize;
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = order[(position + step).rem_euclid(len) as usize];

        if self.focus == Focus::Search && next != Focus::Search {
            self.suggest.clear();
        }
        self.focus = next;
    }

    /// Stop the worker, dropping anything still in flight
    pub fn shutdown(&mut self) {
        self.suggest.teardown();
        if let Some(mut worker) = self.worker.take() {
            worker.shutdown();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
