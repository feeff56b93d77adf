//! Integration tests for the skill HTTP endpoint.
//!
//! These tests drive the full router (DTO decoding, dispatch, handlers and
//! response encoding) against a scripted catalog.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ytmusic_skill::adapters::catalog::{CatalogCall, MockMusicCatalog};
use ytmusic_skill::adapters::skill_router;
use ytmusic_skill::application::SkillDispatcher;
use ytmusic_skill::domain::catalog::{PlaylistDetail, PlaylistSummary, SongRecord};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(catalog: MockMusicCatalog) -> Router {
    let dispatcher = SkillDispatcher::standard(Arc::new(catalog));
    skill_router(Arc::new(dispatcher), Duration::from_secs(5))
}

fn wonderwall() -> SongRecord {
    SongRecord::new("Wonderwall", "Oasis", "https://stream.example/ww", "v1")
}

fn envelope(request: Value) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "sessionId": "amzn1.echo-api.session.test",
            "new": false,
            "attributes": {}
        },
        "request": request
    })
}

fn intent(name: &str, slots: Value, locale: &str) -> Value {
    envelope(json!({
        "type": "IntentRequest",
        "requestId": "req-1",
        "locale": locale,
        "intent": { "name": name, "slots": slots }
    }))
}

async fn post_alexa(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/alexa")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send(app: Router, envelope: Value) -> Value {
    let (status, body) = post_alexa(app, envelope.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    body
}

// =============================================================================
// Conversation
// =============================================================================

#[tokio::test]
async fn launch_welcomes_and_keeps_session_open() {
    let body = send(
        app(MockMusicCatalog::new()),
        envelope(json!({ "type": "LaunchRequest", "requestId": "req-0", "locale": "en-US" })),
    )
    .await;

    assert_eq!(body["version"], json!("1.0"));
    let text = body["response"]["outputSpeech"]["text"].as_str().unwrap();
    assert!(text.starts_with("Welcome to YouTube Music."));
    assert_eq!(body["response"]["outputSpeech"]["type"], json!("PlainText"));
    assert_eq!(body["response"]["reprompt"]["outputSpeech"]["text"], json!(text));
    assert_eq!(body["response"]["shouldEndSession"], json!(false));
}

#[tokio::test]
async fn spanish_locale_gets_spanish_help() {
    let body = send(
        app(MockMusicCatalog::new()),
        intent("AMAZON.HelpIntent", json!({}), "es-MX"),
    )
    .await;

    let text = body["response"]["outputSpeech"]["text"].as_str().unwrap();
    assert!(text.starts_with("Puedes pedirme"));
}

#[tokio::test]
async fn stop_says_goodbye_and_stops_audio() {
    let body = send(
        app(MockMusicCatalog::new()),
        intent("AMAZON.StopIntent", json!({}), "en-US"),
    )
    .await;

    assert_eq!(body["response"]["outputSpeech"]["text"], json!("Goodbye!"));
    assert_eq!(
        body["response"]["directives"],
        json!([{ "type": "AudioPlayer.Stop" }])
    );
    assert!(body["response"].get("shouldEndSession").is_none());
}

#[tokio::test]
async fn session_ended_returns_empty_response() {
    let body = send(
        app(MockMusicCatalog::new()),
        envelope(json!({
            "type": "SessionEndedRequest",
            "requestId": "req-9",
            "locale": "en-US",
            "reason": "USER_INITIATED"
        })),
    )
    .await;

    assert_eq!(body, json!({ "version": "1.0", "response": {} }));
}

// =============================================================================
// Music
// =============================================================================

#[tokio::test]
async fn play_music_streams_top_result() {
    let catalog = MockMusicCatalog::new().with_search_results(vec![wonderwall()]);
    let body = send(
        app(catalog.clone()),
        intent(
            "PlayMusicIntent",
            json!({ "query": { "name": "query", "value": "Wonderwall" } }),
            "en-US",
        ),
    )
    .await;

    assert_eq!(
        body["response"],
        json!({
            "outputSpeech": { "type": "PlainText", "text": "Playing Wonderwall by Oasis" },
            "directives": [{
                "type": "AudioPlayer.Play",
                "playBehavior": "REPLACE_ALL",
                "audioItem": {
                    "stream": {
                        "url": "https://stream.example/ww",
                        "token": "v1",
                        "offsetInMilliseconds": 0
                    }
                }
            }]
        })
    );
    assert_eq!(catalog.calls(), vec![CatalogCall::Search("Wonderwall".to_string())]);
}

#[tokio::test]
async fn play_music_without_query_asks() {
    let catalog = MockMusicCatalog::new();
    let body = send(
        app(catalog.clone()),
        intent("PlayMusicIntent", json!({ "query": { "name": "query" } }), "en-US"),
    )
    .await;

    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        json!("What music would you like to listen to?")
    );
    assert_eq!(body["response"]["shouldEndSession"], json!(false));
    assert_eq!(catalog.call_count(), 0);
}

#[tokio::test]
async fn catalog_outage_is_spoken_as_no_results() {
    let body = send(
        app(MockMusicCatalog::new()),
        intent(
            "PlayMusicIntent",
            json!({ "query": { "name": "query", "value": "lofi" } }),
            "en-US",
        ),
    )
    .await;

    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        json!("I couldn't find music for lofi. Try a different search.")
    );
    assert!(body["response"].get("directives").is_none());
}

#[tokio::test]
async fn play_playlist_stores_session_state() {
    let catalog = MockMusicCatalog::new()
        .with_playlists(vec![
            PlaylistSummary::new("PL1", "Chill"),
            PlaylistSummary::new("PL2", "Workout Mix"),
        ])
        .with_playlist(PlaylistDetail {
            playlist_id: "PL2".to_string(),
            title: "Workout Mix".to_string(),
            songs: vec![wonderwall()],
        });

    let body = send(
        app(catalog.clone()),
        intent(
            "PlayPlaylistIntent",
            json!({ "playlistName": { "name": "playlistName", "value": "workout" } }),
            "en-US",
        ),
    )
    .await;

    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        json!("Playing playlist Workout Mix. First song: Wonderwall by Oasis")
    );
    assert_eq!(body["sessionAttributes"]["currentIndex"], json!(0));
    assert_eq!(
        body["sessionAttributes"]["currentPlaylist"][0]["video_id"],
        json!("v1")
    );
    assert_eq!(
        catalog.calls(),
        vec![
            CatalogCall::ListPlaylists,
            CatalogCall::GetPlaylist("PL2".to_string())
        ]
    );
}

#[tokio::test]
async fn pause_stops_playback() {
    let body = send(
        app(MockMusicCatalog::new()),
        intent("AMAZON.PauseIntent", json!({}), "en-US"),
    )
    .await;

    assert_eq!(
        body["response"],
        json!({ "directives": [{ "type": "AudioPlayer.Stop" }] })
    );
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn unknown_intent_gets_apology() {
    let body = send(
        app(MockMusicCatalog::new()),
        intent("AMAZON.ShuffleOnIntent", json!({}), "en-US"),
    )
    .await;

    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        json!("Sorry, I had trouble doing what you asked. Please try again.")
    );
    assert_eq!(body["response"]["shouldEndSession"], json!(false));
}

#[tokio::test]
async fn unknown_request_type_gets_apology() {
    let body = send(
        app(MockMusicCatalog::new()),
        json!({
            "version": "1.0",
            "request": {
                "type": "AudioPlayer.PlaybackStarted",
                "requestId": "req-5",
                "locale": "es-ES"
            }
        }),
    )
    .await;

    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        json!("Lo siento, hubo un problema. Por favor intenta de nuevo.")
    );
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = post_alexa(app(MockMusicCatalog::new()), "not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn intent_request_without_intent_is_bad_request() {
    let (status, body) = post_alexa(
        app(MockMusicCatalog::new()),
        envelope(json!({ "type": "IntentRequest", "locale": "en-US" })).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("IntentRequest without an intent"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_version() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app(MockMusicCatalog::new()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({ "status": "healthy", "version": env!("CARGO_PKG_VERSION") })
    );
}
