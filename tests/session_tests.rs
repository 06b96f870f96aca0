//! Session behavior tests against a mocked Gemini endpoint.

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use declutter::{ChatSession, EncodedImage, Error, Gemini, Transcript};

const GENERATE_PATH: &str = "/models/gemini-3-pro-preview:generateContent";

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": text}]
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 20, "totalTokenCount": 30}
    }))
}

fn session_against(server: &MockServer) -> ChatSession {
    let client = Gemini::with_options(
        Some("test-key".to_string()),
        Some(format!("{}/", server.uri())),
        None,
    )
    .expect("client should build");
    ChatSession::new(client)
}

async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|r| serde_json::from_slice(&r.body).expect("request body should be JSON"))
        .collect()
}

#[tokio::test]
async fn text_only_turn_carries_no_image_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(text_response("Start with the nightstand."))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    let reply = session
        .send_message("How do I keep my nightstand tidy?", None)
        .await
        .unwrap();
    assert_eq!(reply, "Start with the nightstand.");

    let bodies = request_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    let parts = bodies[0]["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 1);
    assert!(parts[0].get("text").is_some());
    assert!(parts[0].get("inlineData").is_none());
}

#[tokio::test]
async fn image_turn_is_exactly_inline_then_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response("Here are 3 tips..."))
        .mount(&server)
        .await;

    let image = EncodedImage::from_jpeg_bytes(&[0xff, 0xd8, 0xff, 0xe0]);
    let expected_data = image.data.clone();

    let mut session = session_against(&server);
    let reply = session
        .send_message("Analyze this room and give me organization tips.", Some(image))
        .await
        .unwrap();
    assert!(!reply.is_empty());
    assert_eq!(reply, "Here are 3 tips...");

    let bodies = request_bodies(&server).await;
    let parts = bodies[0]["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(
        parts[0]["inlineData"],
        json!({"mimeType": "image/jpeg", "data": expected_data})
    );
    assert_eq!(
        parts[1],
        json!({"text": "Analyze this room and give me organization tips."})
    );
}

#[tokio::test]
async fn first_send_implicitly_creates_a_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response("ok"))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    assert_eq!(session.handle_id(), None);

    let reply = session.send_message("hello", None).await;
    assert!(reply.is_ok(), "a fresh manager must never need setup");
    assert!(session.handle_id().is_some());
}

#[tokio::test]
async fn request_carries_system_instruction_and_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response("reply"))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    session.send_message("first", None).await.unwrap();
    session.send_message("second", None).await.unwrap();

    let bodies = request_bodies(&server).await;
    assert_eq!(bodies.len(), 2);

    let instruction = bodies[0]["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(instruction.contains("DeclutterAI"));

    // Second request replays the first turn and its reply before the new turn.
    let contents = bodies[1]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[2]["parts"][0]["text"], "second");
}

#[tokio::test]
async fn start_new_session_replaces_handle_and_drops_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response("reply"))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    session.send_message("remember the hallway", None).await.unwrap();
    let first_handle = session.handle_id().unwrap();

    session.start_new_session();
    let second_handle = session.handle_id().unwrap();
    assert_ne!(first_handle, second_handle);

    session.send_message("fresh start", None).await.unwrap();

    let bodies = request_bodies(&server).await;
    let contents = bodies[1]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1, "no state from before the reset");
    assert_eq!(contents[0]["parts"][0]["text"], "fresh start");
}

#[tokio::test]
async fn empty_candidate_text_is_an_error_not_a_blank_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    let err = session.send_message("anything there?", None).await.unwrap_err();
    assert!(err.is_empty_response());
}

#[tokio::test]
async fn blocked_candidate_is_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    let err = session.send_message("hm", None).await.unwrap_err();
    assert!(err.is_empty_response());
}

#[tokio::test]
async fn transport_error_propagates_and_yields_one_error_bubble() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "backend exploded", "status": "INTERNAL"}
        })))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    let mut transcript = Transcript::new();

    transcript.push_user("Analyze this room and give me organization tips.", None);
    transcript.set_busy(true);
    let result = session.send_message("Analyze this room and give me organization tips.", None).await;
    match result {
        Ok(_) => panic!("expected an error, not a string"),
        Err(err) => {
            assert!(err.is_server_error());
            transcript.push_error(
                "Sorry, something went wrong. Please check your connection or try again.",
            );
        }
    }
    transcript.set_busy(false);

    let errors: Vec<_> = transcript
        .messages()
        .iter()
        .filter(|m| m.is_error)
        .collect();
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn failed_turn_leaves_history_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response("still here"))
        .mount(&server)
        .await;

    let mut session = session_against(&server);
    let err = session.send_message("first try", None).await.unwrap_err();
    assert!(matches!(err, Error::RateLimit { .. }));

    // Session stays usable and the failed turn was not recorded.
    let reply = session.send_message("second try", None).await.unwrap();
    assert_eq!(reply, "still here");

    let bodies = request_bodies(&server).await;
    let contents = bodies[1]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["parts"][0]["text"], "second try");
}
