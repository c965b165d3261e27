use thiserror::Error;

/// Fixed reply when a request carries no usable `frage` field.
pub const MISSING_QUESTION_MESSAGE: &str =
    "Keine Frage erhalten. Bitte sende eine Nachricht im Format: {\"frage\": \"deine Frage\"}";

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to parse request body: {0}")]
    MalformedBody(String),

    #[error("Request contained no question")]
    MissingQuestion,

    #[error("Failed to load knowledge document: {0}")]
    KnowledgeUnavailable(String),

    #[error("Failed to get a completion: {0}")]
    CompletionFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BotError {
    /// HTTP status code reported to the caller for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            BotError::MalformedBody(_) | BotError::MissingQuestion => 400,
            BotError::KnowledgeUnavailable(_)
            | BotError::CompletionFailed(_)
            | BotError::Internal(_) => 500,
        }
    }

    /// Text placed in the `antwort` field of the error response.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BotError::MalformedBody(detail) => {
                format!("Fehler beim Parsen der Anfrage: {detail}")
            }
            BotError::MissingQuestion => MISSING_QUESTION_MESSAGE.to_string(),
            other => format!("Ein Fehler ist aufgetreten: {other}"),
        }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::CompletionFailed(format!("OpenAI API request failed: {error}"))
    }
}

impl From<serde_json::Error> for BotError {
    fn from(error: serde_json::Error) -> Self {
        BotError::CompletionFailed(format!("Failed to parse OpenAI response: {error}"))
    }
}
