#[cfg(test)]
pub mod test_helpers {
    use crate::api::{ApiRequest, SongSuggestion};
    use crate::app::App;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// App wired to a channel the test can read requests from
    pub fn connected_app() -> (App, UnboundedReceiver<ApiRequest>) {
        let (tx, rx) = unbounded_channel();
        let mut app = test_app();
        app.connect(tx);
        (app, rx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Type `text` one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    pub fn suggestions(pairs: &[(&str, &str)]) -> Vec<SongSuggestion> {
        pairs
            .iter()
            .map(|(title, artist)| SongSuggestion::new(*title, *artist))
            .collect()
    }

    /// Drain every request sent so far
    pub fn drain_requests(rx: &mut UnboundedReceiver<ApiRequest>) -> Vec<ApiRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = rx.try_recv() {
            requests.push(request);
        }
        requests
    }
}
