//! HttpBackend against a mocked chat endpoint

use bubblechat::history::{ChatHistory, DEFAULT_STORAGE_KEY};
use bubblechat::prompt::{SYSTEM_INSTRUCTIONS, compose_query};
use bubblechat::storage::MemoryStore;
use bubblechat::{
    ChatBackend, ChatError, ChatSession, FALLBACK_REPLY, HttpBackend, SubmitOutcome, WidgetConfig,
    dispatch,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(format!("{}/o3mini", server.uri()))
}

#[tokio::test]
async fn posts_query_and_reads_response_field() {
    let server = MockServer::start().await;
    let expected_query =
        format!("Query: Hello\nMemory:\n\nSystem Instructions:\n{SYSTEM_INSTRUCTIONS}");
    Mock::given(method("POST"))
        .and(path("/o3mini"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": expected_query })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Hi there!" })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .complete(&compose_query("Hello", &[]))
        .await
        .expect("request should succeed");
    assert_eq!(reply, "Hi there!");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = backend_for(&server).complete("Query: x").await.unwrap_err();
    match err {
        ChatError::Status { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_response_field_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": "wrong shape" })))
        .mount(&server)
        .await;

    let err = backend_for(&server).complete("Query: x").await.unwrap_err();
    assert!(matches!(err, ChatError::Decode(_)));
}

#[tokio::test]
async fn transport_failure_becomes_fallback_reply() {
    // Nothing listens on the discard port.
    let backend = HttpBackend::new("http://127.0.0.1:9/o3mini");
    assert_eq!(dispatch(&backend, "Query: hi").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn configured_timeout_gives_up_on_slow_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "too late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = WidgetConfig {
        endpoint: format!("{}/o3mini", server.uri()),
        timeout: Some(Duration::from_millis(200)),
        ..WidgetConfig::default()
    };
    let backend = HttpBackend::from_config(&config).unwrap();
    assert_eq!(dispatch(&backend, "Query: hi").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn full_round_trip_through_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/o3mini"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/o3mini"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Back online." })))
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    let backend = backend_for(&server);
    let mut chat = ChatSession::restore(ChatHistory::new(
        Box::new(store.clone()),
        DEFAULT_STORAGE_KEY,
    ));
    chat.open();

    for text in ["Hello", "Are you there?"] {
        chat.set_input(text);
        let SubmitOutcome::Dispatch(pending) = chat.submit() else {
            panic!("expected dispatch");
        };
        let reply = dispatch(&backend, &pending.query).await;
        chat.settle(&pending, reply);
    }

    let history: Vec<(&str, bool)> = chat
        .messages()
        .iter()
        .map(|msg| (msg.text.as_str(), msg.is_user))
        .collect();
    assert_eq!(
        history,
        vec![
            ("Hello", true),
            (FALLBACK_REPLY, false),
            ("Are you there?", true),
            ("Back online.", false),
        ]
    );

    let reloaded = ChatHistory::new(Box::new(store), DEFAULT_STORAGE_KEY).load();
    assert_eq!(reloaded, chat.messages());
}
