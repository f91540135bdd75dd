use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const DISMISS_HINT: &str = "[Enter] OK";
const TOAST_MARGIN: u16 = 1;

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
    }
}

/// Draw the current notification, if any
///
/// Blocking notifications are centered like a dialog; transient ones sit
/// in the top-right corner.
pub fn render_notification(state: &NotificationState, frame: &mut Frame) {
    let Some(notification) = state.current() else {
        return;
    };
    let frame_area = frame.area();
    let color = kind_color(notification.kind);
    let text_width = notification.message.width() as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    if notification.blocking {
        let width = (text_width + 4).max(DISMISS_HINT.len() as u16 + 4);
        let area = popup::centered_popup(frame_area, width, 5);
        popup::clear_area(frame, area);

        let lines = vec![
            Line::from(Span::styled(
                notification.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(DISMISS_HINT, Style::default().fg(Color::DarkGray))),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    } else {
        let width = (text_width + 4).min(frame_area.width);
        let area = Rect {
            x: frame_area.x + frame_area.width.saturating_sub(width + TOAST_MARGIN),
            y: frame_area.y + TOAST_MARGIN.min(frame_area.height),
            width,
            height: 3.min(frame_area.height),
        };
        popup::clear_area(frame, area);

        let paragraph = Paragraph::new(Span::styled(
            notification.message.clone(),
            Style::default().fg(color),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
    }
}
