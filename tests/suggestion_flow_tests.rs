//! End-to-end tests: App driving a real worker against a mock backend

use std::time::{Duration, Instant};

use serde_json::json;
use songboard::api::{ApiClient, ApiWorker, SongSuggestion};
use songboard::app::App;
use songboard::config::Config;
use songboard::suggest::SuggestionView;
use songboard::upload::{FormField, PUBLISHED_TEXT};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> App {
    let client = ApiClient::new(&server.uri(), Duration::from_secs(2)).unwrap();
    let worker = ApiWorker::spawn(client).unwrap();
    App::with_worker(&Config::default(), worker)
}

async fn mount_suggestions(server: &MockServer, q: &str, title: &str, delay_ms: u64) {
    Mock::given(method("GET"))
        .and(path("/search-suggestions"))
        .and(query_param("q", q))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "suggestions": [{ "title": title, "artist": "Queen" }] }))
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

/// Tick the app until `done` holds or `limit` passes
async fn tick_until(app: &mut App, limit: Duration, done: impl Fn(&App) -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < limit {
        app.tick(Instant::now());
        if done(app) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

#[tokio::test(flavor = "multi_thread")]
async fn test_late_response_from_older_lookup_is_discarded() {
    let server = MockServer::start().await;
    mount_suggestions(&server, "bo", "Bohemian Rhapsody", 400).await;
    mount_suggestions(&server, "bor", "Born to Love You", 0).await;

    let mut app = app_for(&server);
    app.suggest.fire_request("bo");
    app.suggest.fire_request("bor");

    let arrived = tick_until(&mut app, Duration::from_secs(3), |app| {
        !app.suggest.suggestions().is_empty()
    })
    .await;
    assert!(arrived);

    // Give the slow response time to land, then make sure it was ignored
    tokio::time::sleep(Duration::from_millis(600)).await;
    app.tick(Instant::now());

    assert_eq!(
        app.suggest.suggestions().to_vec(),
        vec![SongSuggestion::new("Born to Love You", "Queen")]
    );
    app.shutdown();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_shows_failed_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-suggestions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.suggest.fire_request("anything");

    let failed = tick_until(&mut app, Duration::from_secs(3), |app| {
        app.suggest.view() == &SuggestionView::Failed
    })
    .await;
    assert!(failed);
    app.shutdown();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_publish_round_trip_resets_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process_ajax"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": "Imagine" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.form.set_value(FormField::Title, "Imagine");
    app.form.set_value(FormField::Artist, "John Lennon");
    app.form.set_value(FormField::Cover, "cover.png");
    app.form.set_value(FormField::Audio, "imagine.mp3");
    app.publish();
    assert!(app.form.is_publishing());

    let finished = tick_until(&mut app, Duration::from_secs(3), |app| {
        !app.form.is_publishing()
    })
    .await;
    assert!(finished);
    assert_eq!(app.form.value(FormField::Title), "");
    assert_eq!(
        app.notification.current().map(|n| n.message.as_str()),
        Some(PUBLISHED_TEXT)
    );
    app.shutdown();
}
