//! Song card rendering
//!
//! Draws the cards produced by `CatalogController::render_songs`; nothing
//! here reads the records directly.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::catalog_state::{CatalogController, SongCard};

pub const EMPTY_CATALOG_TEXT: &str = "No songs uploaded yet";
pub const COMMENT_PLACEHOLDER: &str = "Leave a comment about this song...";
const SELECTED_STAR: &str = "★";
const UNSELECTED_STAR: &str = "☆";

/// Which widget of the current card has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFocus {
    #[default]
    None,
    Rating,
    Comment,
}

pub fn render_catalog(
    catalog: &CatalogController,
    frame: &mut Frame,
    area: Rect,
    focus: CardFocus,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Uploaded songs ")
        .border_style(Style::default().fg(if focus == CardFocus::None {
            Color::DarkGray
        } else {
            Color::Cyan
        }));

    let cards = catalog.cards();
    if cards.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            EMPTY_CATALOG_TEXT,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let last = cards.len() - 1;
    let mut lines = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        // Focus only ever applies to the current (last) card
        let card_focus = if i == last { focus } else { CardFocus::None };
        lines.extend(card_lines(card, card_focus));
        if i != last {
            lines.push(Line::from(""));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn card_lines(card: &SongCard, focus: CardFocus) -> Vec<Line<'static>> {
    let mut stars: Vec<Span> = vec![label("Rating: ")];
    for selected in card.stars {
        if selected {
            stars.push(Span::styled(
                format!("{} ", SELECTED_STAR),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            stars.push(Span::styled(
                format!("{} ", UNSELECTED_STAR),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    if focus == CardFocus::Rating {
        stars.push(Span::styled(
            "(press 1-5)",
            Style::default().fg(Color::Cyan),
        ));
    }

    let comment = if card.comment.is_empty() {
        Span::styled(
            COMMENT_PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(card.comment.clone())
    };
    let mut comment_line = vec![label("Comment: "), comment];
    if focus == CardFocus::Comment {
        comment_line.push(Span::styled(
            "▏",
            Style::default().fg(Color::Cyan),
        ));
    }

    vec![
        Line::from(vec![label("Title: "), Span::raw(card.title.clone())]),
        Line::from(vec![label("Artist: "), Span::raw(card.artist.clone())]),
        Line::from(stars),
        Line::from(comment_line),
    ]
}
