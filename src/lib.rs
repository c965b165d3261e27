/// Career Bot - a Lambda that answers internship questions for engineering
/// students using a knowledge document and `OpenAI`.
///
/// Each invocation runs one linear pipeline:
/// 1. Extract the `frage` field from the API Gateway event
/// 2. Load the knowledge document from S3
/// 3. Render the advisor prompt around knowledge and question
/// 4. Ask the completion API and unwrap the answer
/// 5. Return `{"antwort": ...}` with CORS headers
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - S3 for the knowledge document
/// - reqwest for the `OpenAI` chat-completions / responses endpoints
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use career_bot::api::AskHandler;
/// use career_bot::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     career_bot::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let handler = AskHandler::from_config(&config).await?;
///
///     let event = serde_json::json!({
///         "httpMethod": "POST",
///         "body": "{\"frage\": \"Welche Firmen bieten ein Grundpraktikum an?\"}"
///     });
///     let response = handler.handle(&event).await;
///     println!("{}: {}", response.status_code, response.body);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use errors::BotError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and defaults
/// to `info`. It should be called once at process start.
///
/// # Example
///
/// ```
/// career_bot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
