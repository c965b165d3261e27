use career_bot::errors::{BotError, MISSING_QUESTION_MESSAGE};
use std::error::Error;

#[test]
fn test_bot_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = BotError::MalformedBody("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_bot_error_display() {
    let error = BotError::KnowledgeUnavailable("NoSuchKey".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to load knowledge document: NoSuchKey"
    );

    let error = BotError::CompletionFailed("status 401".to_string());
    assert_eq!(format!("{error}"), "Failed to get a completion: status 401");
}

#[test]
fn test_client_errors_map_to_400() {
    assert_eq!(BotError::MalformedBody("x".into()).status_code(), 400);
    assert_eq!(BotError::MissingQuestion.status_code(), 400);
}

#[test]
fn test_server_errors_map_to_500() {
    assert_eq!(BotError::KnowledgeUnavailable("x".into()).status_code(), 500);
    assert_eq!(BotError::CompletionFailed("x".into()).status_code(), 500);
    assert_eq!(BotError::Internal("x".into()).status_code(), 500);
}

#[test]
fn test_user_messages() {
    assert_eq!(
        BotError::MalformedBody("EOF while parsing".into()).user_message(),
        "Fehler beim Parsen der Anfrage: EOF while parsing"
    );
    assert_eq!(
        BotError::MissingQuestion.user_message(),
        MISSING_QUESTION_MESSAGE
    );

    let msg = BotError::KnowledgeUnavailable("AccessDenied".into()).user_message();
    assert!(msg.starts_with("Ein Fehler ist aufgetreten: "));
    assert!(msg.contains("AccessDenied"));
}

#[test]
fn test_bot_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    match BotError::from(json_err) {
        BotError::CompletionFailed(msg) => {
            assert!(msg.starts_with("Failed to parse OpenAI response:"), "{msg}");
        }
        other => panic!("Unexpected error type: {other:?}"),
    }

    // Compile-time check that reqwest errors convert.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> BotError {
        BotError::from(err)
    }
}
