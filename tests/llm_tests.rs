use rworklogger::core::context::format_context;
use rworklogger::core::normalize::normalize;
use rworklogger::llm::{
    Assistant, ChatCompletionRequest, ChatGateway, LlmConfig, MISSING_TOKEN_MESSAGE, build_prompt,
};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/api/v1/chat/completions";

fn config_for(server: &MockServer, token: Option<&str>) -> LlmConfig {
    LlmConfig {
        api_url: format!("{}{}", server.uri(), ENDPOINT),
        model: "test/model".to_string(),
        timeout: 5,
        api_token: token.map(str::to_string),
    }
}

/// The gateway uses a blocking client, which must not run on a runtime worker.
async fn ask_blocking(gateway: ChatGateway, question: &str, context: &str) -> String {
    let (q, c) = (question.to_string(), context.to_string());
    tokio::task::spawn_blocking(move || gateway.ask(&q, &c))
        .await
        .expect("blocking task panicked")
}

fn completion(content: &str) -> Value {
    json!({
        "id": "cmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[test]
fn test_prompt_layout() {
    let prompt = build_prompt("CTX", "Who worked most?");
    assert_eq!(
        prompt,
        "You are an assistant for work time tracking. Here is recent data from the database:\n\
         CTX\n\n\
         User question: Who worked most?\n\n\
         Answer based on the data and your own knowledge."
    );
}

#[test]
fn test_prompt_embeds_context_block() {
    let table = normalize(&[]);
    let prompt = build_prompt(&format_context(&table, 10), "q");
    assert!(prompt.contains("database:\nNo work entries available.\n\nUser question: q"));
}

#[test]
fn test_request_body_shape() {
    let req = ChatCompletionRequest::single_user_turn("m", "hello");
    let body = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        body,
        json!({"model": "m", "messages": [{"role": "user", "content": "hello"}]})
    );
}

#[test]
fn test_default_config_has_no_token() {
    let cfg = LlmConfig::default();
    assert!(cfg.api_token.is_none());
    assert_eq!(cfg.timeout, 30);
    assert!(!ChatGateway::new(&cfg).has_token());
}

#[test]
fn test_blank_token_counts_as_missing() {
    let cfg = LlmConfig {
        api_token: Some("   ".into()),
        ..LlmConfig::default()
    };
    assert!(!ChatGateway::new(&cfg).has_token());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_token_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, None));
    let answer = ask_blocking(gateway, "question", "context").await;

    assert_eq!(answer, MISSING_TOKEN_MESSAGE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_successful_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Anna worked most.")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, Some("test-token")));
    let answer = ask_blocking(gateway, "Who worked most?", "CTX").await;
    assert_eq!(answer, "Anna worked most.");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);

    let body: Value = requests[0].body_json().expect("json body");
    assert_eq!(body["model"], "test/model");
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(
        body["messages"][0]["content"],
        build_prompt("CTX", "Who worked most?")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_model_override() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, Some("t"))).with_model("other/model");
    assert_eq!(gateway.model(), "other/model");
    ask_blocking(gateway, "q", "c").await;

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = requests[0].body_json().expect("json body");
    assert_eq!(body["model"], "other/model");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_becomes_answer_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, Some("t")));
    let answer = ask_blocking(gateway, "q", "c").await;

    assert!(answer.starts_with("Error querying LLM agent: HTTP 500"), "{answer}");
    assert!(answer.contains("upstream exploded"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, Some("bad")));
    let answer = ask_blocking(gateway, "q", "c").await;
    assert_eq!(answer, "Error querying LLM agent: HTTP 401: Invalid API key");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_body_without_choices_is_returned_verbatim() {
    let server = MockServer::start().await;
    let body = json!({"error": {"message": "quota exceeded", "code": 402}});
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, Some("t")));
    let answer = ask_blocking(gateway, "q", "c").await;
    assert_eq!(answer, body.to_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_responses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, Some("t")));
    let answer = ask_blocking(gateway, "q", "c").await;
    assert!(answer.starts_with("Error querying LLM agent: invalid response"), "{answer}");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"choices": [{"message": {}}]})),
        )
        .mount(&server)
        .await;

    let gateway = ChatGateway::new(&config_for(&server, Some("t")));
    let answer = ask_blocking(gateway, "q", "c").await;
    assert!(answer.starts_with("Error querying LLM agent: invalid response"), "{answer}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut cfg = config_for(&server, Some("t"));
    cfg.timeout = 1;
    let answer = ask_blocking(ChatGateway::new(&cfg), "q", "c").await;
    assert!(answer.starts_with("Error querying LLM agent: "), "{answer}");
}

struct CannedAssistant;

impl Assistant for CannedAssistant {
    fn ask(&self, question: &str, context: &str) -> String {
        format!("{} rows | {question}", context.lines().count())
    }
}

#[test]
fn test_assistant_is_pluggable() {
    let assistant: Box<dyn Assistant> = Box::new(CannedAssistant);
    assert_eq!(assistant.ask("why?", "a\nb"), "2 rows | why?");
}
