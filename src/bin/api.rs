use career_bot::api::{AskHandler, function_handler};
use career_bot::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    career_bot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    info!(
        api_key_set = config.openai_api_key.is_some(),
        variant = ?config.api_variant,
        model = %config.openai_model,
        "Configuration loaded"
    );
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; completion requests will fail");
    }

    let handler = AskHandler::from_config(&config).await?;
    let handler_ref = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler_ref, event).await
    }))
    .await
}
