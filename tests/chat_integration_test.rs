use httpmock::prelude::*;
use village_organics::adapters::chat::{EMPTY_REPLY, FAILURE_REPLY};
use village_organics::config::ChatConfig;
use village_organics::core::chat::{ChatTranscript, Role};
use village_organics::domain::ports::ChatService;
use village_organics::GeminiChat;

const MODEL: &str = "gemini-test";
const PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn chat_config(endpoint: String) -> ChatConfig {
    ChatConfig {
        endpoint,
        model: MODEL.to_string(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn test_reply_from_generate_content() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(PATH)
            .header("x-goog-api-key", "test-key")
            .body_contains("User Question: Why A2 milk?")
            .body_contains("Context: Viewing A2 Desi Cow Milk");
        then.status(200).json_body(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "A2 milk is easier to digest."}]}}
            ]
        }));
    });

    let chat = GeminiChat::new(&chat_config(server.base_url())).unwrap();
    let reply = chat
        .reply("Why A2 milk?", Some("Viewing A2 Desi Cow Milk"))
        .await;

    api_mock.assert();
    assert_eq!(reply, "A2 milk is easier to digest.");
}

#[tokio::test]
async fn test_empty_candidates_use_empty_reply() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).json_body(serde_json::json!({"candidates": []}));
    });

    let chat = GeminiChat::new(&chat_config(server.base_url())).unwrap();
    assert_eq!(chat.reply("hello", None).await, EMPTY_REPLY);
    api_mock.assert();
}

#[tokio::test]
async fn test_whitespace_reply_is_returned_as_is() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).json_body(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "  \n"}]}}]
        }));
    });

    let chat = GeminiChat::new(&chat_config(server.base_url())).unwrap();
    assert_eq!(chat.reply("hello", None).await, "  \n");
}

#[tokio::test]
async fn test_server_error_falls_back() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(500);
    });

    let chat = GeminiChat::new(&chat_config(server.base_url())).unwrap();
    assert_eq!(chat.reply("hello", None).await, FAILURE_REPLY);
    api_mock.assert();
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).body("<html>not json</html>");
    });

    let chat = GeminiChat::new(&chat_config(server.base_url())).unwrap();
    assert_eq!(chat.reply("hello", None).await, FAILURE_REPLY);
}

#[tokio::test]
async fn test_unreachable_endpoint_falls_back() {
    let chat = GeminiChat::new(&chat_config("http://127.0.0.1:1".to_string())).unwrap();
    assert_eq!(chat.reply("hello", None).await, FAILURE_REPLY);
}

#[tokio::test]
async fn test_transcript_records_fallback_reply() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(503);
    });

    let chat = GeminiChat::new(&chat_config(server.base_url())).unwrap();
    let mut transcript = ChatTranscript::new();
    transcript.send(&chat, "Give me a quinoa recipe").await;

    let last = transcript.messages().last().unwrap();
    assert_eq!(last.role, Role::Bot);
    assert_eq!(last.text, FAILURE_REPLY);
    assert_eq!(transcript.messages().len(), 3);
}
