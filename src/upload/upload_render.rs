//! Upload form rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::upload_state::{FormField, PUBLISHING_TEXT, UploadForm};

const FIELD_HEIGHT: u16 = 3;

/// Height needed to draw the whole form
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * 4 + 1;

pub const PUBLISH_READY_TEXT: &str = "[Ctrl+P] Publish";
pub const PUBLISH_DISABLED_TEXT: &str = "Fill in all fields to publish";

fn field_title(field: FormField) -> &'static str {
    match field {
        FormField::Title => " Title ",
        FormField::Artist => " Artist ",
        FormField::Cover => " Cover image ",
        FormField::Audio => " Audio file ",
    }
}

pub fn render_form(form: &UploadForm, frame: &mut Frame, area: Rect, focused: Option<FormField>) {
    let [title, artist, cover, audio, status] = Layout::vertical([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    for (field, field_area) in FormField::ALL.into_iter().zip([title, artist, cover, audio]) {
        render_field(form, frame, field_area, field, focused == Some(field));
    }

    render_status(form, frame, status);
}

fn render_field(form: &UploadForm, frame: &mut Frame, area: Rect, field: FormField, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field_title(field))
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if focused {
        frame.render_widget(form.field(field), inner);
    } else {
        frame.render_widget(Paragraph::new(form.value(field).to_string()), inner);
    }
}

fn render_status(form: &UploadForm, frame: &mut Frame, area: Rect) {
    let publish = if form.is_publishing() {
        Span::styled(
            PUBLISHING_TEXT,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )
    } else if form.can_publish() {
        Span::styled(
            PUBLISH_READY_TEXT,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(PUBLISH_DISABLED_TEXT, Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled("[Enter] Add to catalog   ", Style::default().fg(Color::White)),
        publish,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(form: &UploadForm, focused: Option<FormField>) -> String {
        let backend = TestBackend::new(70, FORM_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_form(form, f, area, focused)
            })
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_empty_form_publish_disabled() {
        let form = UploadForm::new();
        let output = render(&form, Some(FormField::Title));
        assert!(output.contains("Title"));
        assert!(output.contains("Audio file"));
        assert!(output.contains(PUBLISH_DISABLED_TEXT));
    }

    #[test]
    fn test_complete_form_publish_enabled() {
        let mut form = UploadForm::new();
        form.set_value(FormField::Title, "Imagine");
        form.set_value(FormField::Artist, "John Lennon");
        form.set_value(FormField::Cover, "cover.png");
        form.set_value(FormField::Audio, "imagine.mp3");

        let output = render(&form, None);
        assert!(output.contains("Imagine"));
        assert!(output.contains("imagine.mp3"));
        assert!(output.contains(PUBLISH_READY_TEXT));
    }

    #[test]
    fn test_publishing_message() {
        let mut form = UploadForm::new();
        for field in FormField::ALL {
            form.set_value(field, "x");
        }
        form.begin_publish().unwrap();

        let output = render(&form, None);
        assert!(output.contains(PUBLISHING_TEXT));
        assert!(!output.contains(PUBLISH_READY_TEXT));
    }
}
