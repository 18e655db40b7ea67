pub mod prompt;
pub mod reply;

use std::fmt;
use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

pub use prompt::build_prompt;
pub use reply::{parse_reply, FallbackCause, ParsedReply};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-70b-instruct:free";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of the single completion call. Both variants render as the
/// message shown to the user in place of an email.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("API error: {status}")]
    ApiStatus { status: u16, body: String },
    #[error("Exception: {0:#}")]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    #[default]
    Friendly,
    Short,
    Long,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Short => "Short",
            Tone::Long => "Long",
        };
        f.write_str(name)
    }
}

/// Layout the model is asked to reply in, and that the reply parser expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A single JSON object with `email` and `why_this_match_works` keys.
    #[default]
    Structured,
    /// `EMAIL:` and `REASONS:` marker lines followed by their content.
    Delimited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachRequest {
    pub company_profile: String,
    pub persona_profile: String,
    pub product_description: String,
    pub tone: Tone,
}

impl OutreachRequest {
    pub fn new(
        company_profile: impl Into<String>,
        persona_profile: impl Into<String>,
        product_description: impl Into<String>,
        tone: Tone,
    ) -> Self {
        Self {
            company_profile: company_profile.into(),
            persona_profile: persona_profile.into(),
            product_description: product_description.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutreachResult {
    #[serde(rename = "email")]
    pub email_text: String,
    #[serde(rename = "why_this_match_works")]
    pub reasons: Vec<String>,
}

impl OutreachResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            email_text: message.into(),
            reasons: Vec::new(),
        }
    }
}

/// Everything the generator needs, supplied by the caller. The generator
/// never reads the environment itself.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub shape: Shape,
}

impl GeneratorConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            shape: Shape::default(),
        }
    }
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OutreachGenerator {
    client: Client,
    endpoint: String,
    model: String,
    shape: Shape,
}

impl OutreachGenerator {
    pub fn new(config: GeneratorConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", config.api_key);
        let auth_value = HeaderValue::from_str(&auth_value)
            .context("Invalid API key for Authorization header")?;
        headers.insert(AUTHORIZATION, auth_value);
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build completion HTTP client")?;
        let endpoint = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        Ok(Self {
            client,
            endpoint,
            model: config.model,
            shape: config.shape,
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Send `prompt` as a single user message and return the content of the
    /// first choice. Exactly one request is made; there are no retries.
    pub async fn invoke(&self, prompt: &str) -> Result<String, CompletionError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .context("Completion request failed")?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiStatus { status, body });
        }

        let body = response.text().await.context("Completion response body")?;
        let data: ChatResponse =
            serde_json::from_str(&body).context("Completion response JSON")?;
        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("Completion response has no message content")?;
        Ok(content)
    }

    /// Run one round trip and report whether the reply matched the requested
    /// shape.
    pub async fn generate_detailed(&self, request: &OutreachRequest) -> ParsedReply {
        let prompt = build_prompt(request, self.shape);
        log::info!(
            "sending outreach prompt to {} ({} tone, {:?} reply)",
            self.model,
            request.tone,
            self.shape
        );
        log::debug!("prompt is {} chars", prompt.len());

        let raw = self.invoke(&prompt).await;
        match &raw {
            Ok(reply) => log::debug!("received {} chars from model", reply.len()),
            Err(CompletionError::ApiStatus { status, body }) => {
                log::warn!("completion API returned status {}: {}", status, body)
            }
            Err(err) => log::warn!("completion request failed: {}", err),
        }

        parse_reply(raw, self.shape)
    }

    /// Generate an outreach email. Never fails: transport, API and parse
    /// errors all come back as an `OutreachResult`.
    pub async fn generate_outreach(&self, request: &OutreachRequest) -> OutreachResult {
        self.generate_detailed(request).await.into_result()
    }
}
