//! Suggestion popup rendering
//!
//! Draws the suggestion surface as a popup directly under the search input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::suggest_state::{SuggestionController, SuggestionView};
use crate::widgets::popup;

pub const LOADING_TEXT: &str = "Searching...";
pub const NO_MATCHES_TEXT: &str = "No matching songs";
pub const FAILED_TEXT: &str = "Could not load suggestions";

const MIN_POPUP_WIDTH: u16 = 30;
const POPUP_BORDER: u16 = 2;
const ROW_PADDING: u16 = 4;

/// Render the suggestion popup under `anchor`, within `bounds`
pub fn render_popup(
    controller: &SuggestionController,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    max_visible: usize,
) {
    match controller.view() {
        SuggestionView::Hidden => {}
        SuggestionView::Loading => {
            render_status(frame, anchor, bounds, LOADING_TEXT, Color::DarkGray);
        }
        SuggestionView::NoMatches => {
            render_status(frame, anchor, bounds, NO_MATCHES_TEXT, Color::Yellow);
        }
        SuggestionView::Failed => {
            render_status(frame, anchor, bounds, FAILED_TEXT, Color::Red);
        }
        SuggestionView::Results(_) => {
            render_results(controller, frame, anchor, bounds, max_visible.max(1));
        }
    }
}

fn popup_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
}

fn render_status(frame: &mut Frame, anchor: Rect, bounds: Rect, text: &str, color: Color) {
    let width = (text.width() as u16 + ROW_PADDING).max(MIN_POPUP_WIDTH);
    let area = popup::popup_below_anchor(anchor, bounds, width, 1 + POPUP_BORDER);
    if area.height == 0 {
        return;
    }

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::ITALIC),
    )))
    .block(popup_block(" Suggestions ".to_string()));
    frame.render_widget(paragraph, area);
}

fn render_results(
    controller: &SuggestionController,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    max_visible: usize,
) {
    let rows = controller.suggestions();
    let selected = controller.selected_index();

    // Keep the highlighted row inside the visible window
    let offset = selected.saturating_sub(max_visible - 1);
    let visible: Vec<(usize, String)> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .map(|(i, s)| (i, s.display_text()))
        .collect();

    let text_width = visible
        .iter()
        .map(|(_, text)| text.width())
        .max()
        .unwrap_or(0) as u16;
    let width = (text_width + ROW_PADDING).max(MIN_POPUP_WIDTH);
    let height = visible.len() as u16 + POPUP_BORDER;

    let area = popup::popup_below_anchor(anchor, bounds, width, height);
    if area.height == 0 {
        return;
    }

    let items: Vec<ListItem> = visible
        .into_iter()
        .map(|(i, text)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!(" {}", text), style)))
        })
        .collect();

    let title = format!(" Suggestions ({}) ", rows.len());
    let list = List::new(items).block(popup_block(title));

    popup::clear_area(frame, area);
    frame.render_widget(list, area);
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
