use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_KNOWLEDGE_BUCKET: &str = "wagp-regional-carrer-bot-group9";
pub const DEFAULT_KNOWLEDGE_KEY: &str = "wissen.json";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which completion endpoint the bot talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVariant {
    /// `POST /chat/completions` with a system + user message pair.
    #[default]
    Chat,
    /// `POST /responses` with a single `input` string.
    Responses,
}

impl FromStr for ApiVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" | "chat_completions" | "chat-completions" => Ok(ApiVariant::Chat),
            "responses" => Ok(ApiVariant::Responses),
            other => Err(format!(
                "OPENAI_API_VARIANT: unknown variant '{other}' (expected 'chat' or 'responses')"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub openai_timeout: Option<Duration>,
    pub api_variant: ApiVariant,
    pub knowledge_bucket: String,
    pub knowledge_key: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_VARIANT` or `OPENAI_TIMEOUT_SECS` hold
    /// values that cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_variant = match var("OPENAI_API_VARIANT") {
            Some(raw) => raw.parse()?,
            None => ApiVariant::default(),
        };

        let openai_timeout = var("OPENAI_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| format!("OPENAI_TIMEOUT_SECS: {e}"))
            })
            .transpose()?;

        Ok(Self {
            openai_api_key: var("OPENAI_API_KEY"),
            openai_org_id: var("OPENAI_ORG_ID"),
            openai_model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_timeout,
            api_variant,
            knowledge_bucket: var("KNOWLEDGE_BUCKET")
                .unwrap_or_else(|| DEFAULT_KNOWLEDGE_BUCKET.to_string()),
            knowledge_key: var("KNOWLEDGE_KEY").unwrap_or_else(|| DEFAULT_KNOWLEDGE_KEY.to_string()),
        })
    }
}
