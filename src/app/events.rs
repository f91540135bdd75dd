use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::{App, Focus};
use crate::catalog::MAX_RATING;
use crate::upload::FormField;
use crate::widgets::textarea::textarea_text;

impl App {
    /// Wait up to `timeout` for an event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Form(field) => self.handle_form_key(field, key),
            Focus::Rating => self.handle_rating_key(key),
            Focus::Comment => self.handle_comment_key(key),
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        // Blocking notifications swallow everything until dismissed
        if self.notification.is_blocking() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notification.dismiss();
            }
            return true;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_previous();
                true
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.publish();
                true
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle.toggle();
                true
            }
            _ => false,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let popup_has_rows = !self.suggest.suggestions().is_empty();

        match key.code {
            KeyCode::Down if popup_has_rows => self.suggest.select_next(),
            KeyCode::Up if popup_has_rows => self.suggest.select_previous(),
            KeyCode::Enter => {
                if let Some(text) = self.suggest.accept_selected() {
                    self.set_search_text(&text);
                }
            }
            KeyCode::Esc => self.suggest.clear(),
            _ => {
                if self.search.input(key) {
                    let text = self.search_text().to_string();
                    self.suggest.on_input_changed(&text);
                }
            }
        }
    }

    fn handle_form_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_song(),
            _ => {
                self.form.field_mut(field).input(key);
            }
        }
    }

    fn handle_rating_key(&mut self, key: KeyEvent) {
        let KeyCode::Char(c) = key.code else {
            return;
        };
        let Some(value) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) else {
            return;
        };
        if !(1..=MAX_RATING).contains(&value) {
            return;
        }
        if let Some(id) = self.catalog.current().map(|song| song.id) {
            self.catalog.set_rating(id, value);
        }
    }

    fn handle_comment_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            return;
        }
        if self.comment.input(key)
            && let Some(id) = self.catalog.current().map(|song| song.id)
        {
            let text = textarea_text(&self.comment).to_string();
            self.catalog.set_comment(id, &text);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
