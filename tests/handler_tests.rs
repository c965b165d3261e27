use async_trait::async_trait;
use career_bot::ai::{CompletionBackend, NO_ANSWER_PLACEHOLDER, PromptText};
use career_bot::api::AskHandler;
use career_bot::clients::KnowledgeSource;
use career_bot::errors::BotError;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct FakeKnowledge {
    result: Result<String, String>,
    calls: AtomicUsize,
}

impl FakeKnowledge {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl KnowledgeSource for FakeKnowledge {
    async fn fetch(&self) -> Result<String, BotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map_err(BotError::KnowledgeUnavailable)
    }
}

struct FakeCompletion {
    answer: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeCompletion {
    fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for FakeCompletion {
    async fn complete(&self, prompt: &PromptText) -> Result<String, BotError> {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());
        self.answer.clone().map_err(BotError::CompletionFailed)
    }
}

fn post(body: Value) -> Value {
    json!({"httpMethod": "POST", "body": body})
}

#[tokio::test]
async fn test_well_formed_request_returns_answer() {
    let knowledge = FakeKnowledge::ok("Firma Alpha: Maschinenbau, Gummersbach");
    let completion = FakeCompletion::answering("Bewirb dich bei Firma Alpha.");
    let handler = AskHandler::new(knowledge.clone(), completion.clone());

    let response = handler
        .handle(&post(json!("{\"frage\": \"Wo Maschinenbau?\"}")))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.answer().as_deref(),
        Some("Bewirb dich bei Firma Alpha.")
    );
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));

    let prompts = completion.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Firma Alpha: Maschinenbau, Gummersbach"));
    assert!(prompts[0].contains("Wo Maschinenbau?"));
    assert_eq!(knowledge.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_knowledge_is_fetched_on_every_request() {
    let knowledge = FakeKnowledge::ok("wissen");
    let handler = AskHandler::new(knowledge.clone(), FakeCompletion::answering("ok"));

    handler.handle(&json!({"frage": "eins"})).await;
    handler.handle(&json!({"frage": "zwei"})).await;

    assert_eq!(knowledge.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_preflight_short_circuits() {
    let knowledge = FakeKnowledge::failing("should not be called");
    let completion = FakeCompletion::failing("should not be called");
    let handler = AskHandler::new(knowledge.clone(), completion.clone());

    let response = handler
        .handle(&json!({"httpMethod": "OPTIONS", "body": "{"}))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "");
    assert_eq!(response.header("Access-Control-Allow-Methods"), Some("POST,OPTIONS"));
    assert_eq!(knowledge.calls.load(Ordering::SeqCst), 0);
    assert!(completion.prompts().is_empty());
}

#[tokio::test]
async fn test_invalid_json_body_returns_400() {
    let knowledge = FakeKnowledge::ok("wissen");
    let handler = AskHandler::new(knowledge.clone(), FakeCompletion::answering("x"));

    let response = handler.handle(&post(json!("{"))).await;

    assert_eq!(response.status_code, 400);
    let answer = response.answer().unwrap();
    assert!(answer.starts_with("Fehler beim Parsen der Anfrage:"), "{answer}");
    assert_eq!(knowledge.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_question_returns_400() {
    let handler = AskHandler::new(FakeKnowledge::ok("wissen"), FakeCompletion::answering("x"));

    for body in [json!("{}"), json!("{\"frage\": \"\"}"), json!({})] {
        let response = handler.handle(&post(body)).await;
        assert_eq!(response.status_code, 400);
        assert!(
            response
                .answer()
                .unwrap()
                .starts_with("Keine Frage erhalten.")
        );
    }
}

#[tokio::test]
async fn test_knowledge_failure_returns_500_with_error_text() {
    let completion = FakeCompletion::answering("x");
    let handler = AskHandler::new(FakeKnowledge::failing("NoSuchKey: wissen.json"), completion.clone());

    let response = handler.handle(&json!({"frage": "Hallo?"})).await;

    assert_eq!(response.status_code, 500);
    assert!(response.answer().unwrap().contains("NoSuchKey: wissen.json"));
    assert!(completion.prompts().is_empty());
}

#[tokio::test]
async fn test_completion_failure_returns_500_with_error_text() {
    let handler = AskHandler::new(
        FakeKnowledge::ok("wissen"),
        FakeCompletion::failing("OpenAI API error (status 429 Too Many Requests)"),
    );

    let response = handler.handle(&json!({"frage": "Hallo?"})).await;

    assert_eq!(response.status_code, 500);
    let answer = response.answer().unwrap();
    assert!(answer.starts_with("Ein Fehler ist aufgetreten:"));
    assert!(answer.contains("429"));
}

#[tokio::test]
async fn test_placeholder_answer_is_still_200() {
    let handler = AskHandler::new(
        FakeKnowledge::ok("wissen"),
        FakeCompletion::answering(NO_ANSWER_PLACEHOLDER),
    );

    let response = handler.handle(&json!({"frage": "Hallo?"})).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.answer().as_deref(), Some(NO_ANSWER_PLACEHOLDER));
}

#[tokio::test]
async fn test_lambda_entrypoint_wraps_handler() {
    use career_bot::api::function_handler;
    use lambda_runtime::{Context, LambdaEvent};

    let handler = AskHandler::new(FakeKnowledge::ok("wissen"), FakeCompletion::answering("Antwort"));
    let event = LambdaEvent::new(
        json!({"requestContext": {"http": {"method": "POST"}}, "body": "{\"frage\": \"Hallo?\"}"}),
        Context::default(),
    );

    let response = function_handler(&handler, event).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.answer().as_deref(), Some("Antwort"));
}
