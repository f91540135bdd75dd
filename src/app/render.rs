use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::catalog::catalog_render::render_catalog;
use crate::notification::render_notification;
use crate::suggest::suggest_render::render_popup;
use crate::upload::upload_render::{FORM_HEIGHT, render_form};

const SEARCH_HEIGHT: u16 = 3;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [search_area, body_area, toggle_area, footer_area] = Layout::vertical([
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(FORM_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [form_area, catalog_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body_area);
        let [form_area, _] =
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
                .areas(form_area);

        self.render_search(frame, search_area);

        let focused_field = match self.focus {
            Focus::Form(field) => Some(field),
            _ => None,
        };
        render_form(&self.form, frame, form_area, focused_field);
        render_catalog(&self.catalog, frame, catalog_area, self.focus.card_focus());

        self.render_toggle(frame, toggle_area);
        self.render_footer(frame, footer_area);

        // Overlays last so they sit on top
        let frame_area = frame.area();
        render_popup(&self.suggest, frame, search_area, frame_area, self.max_visible);
        render_notification(&self.notification, frame);
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Search {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.search.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search songs ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.search, area);
    }

    fn render_toggle(&self, frame: &mut Frame, area: Rect) {
        let (label, color) = if self.toggle.is_pressed() {
            ("[Ctrl+B] Button: ON ", Color::Green)
        } else {
            ("[Ctrl+B] Button: OFF", Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled(label, Style::default().fg(color)),
            Span::raw("  "),
            Span::styled(
                self.toggle.text(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.focus {
            Focus::Search => "↑↓ Select | Enter Accept | Esc Close | Tab Next | Ctrl+C Quit",
            Focus::Form(_) => "Enter Add to catalog | Ctrl+P Publish | Tab Next | Ctrl+C Quit",
            Focus::Rating => "1-5 Rate | Tab Next | Ctrl+C Quit",
            Focus::Comment => "Type to comment | Tab Next | Ctrl+C Quit",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
            area,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
