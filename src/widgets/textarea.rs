use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Creates a TextArea configured for single-line input.
pub fn create_single_line_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// First (and only) line of a single-line TextArea
pub fn textarea_text<'a>(textarea: &'a TextArea<'static>) -> &'a str {
    textarea.lines().first().map(String::as_str).unwrap_or("")
}

#[cfg(test)]
#[path = "textarea_tests.rs"]
mod textarea_tests;
