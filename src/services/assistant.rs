use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{max_tokens_for, AssistantRequest, AssistantResponse};
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const SYSTEM_PROMPT: &str = "You are a helpful, concise study assistant.";
pub const EMPTY_REPLY: &str = "No response received";
pub const DEFAULT_RETRY_AFTER: &str = "60";

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatReply>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// First choice's message content.
    ///
    /// An empty `choices` array, a missing or `null` message and a `null`
    /// content all collapse to the placeholder instead of failing the
    /// request or relaying `null`. This is a deliberate departure from the
    /// Flask backend, which raised a 500 for the first two and echoed `null`.
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_else(|| EMPTY_REPLY.to_string())
    }
}

/// Relays study prompts to an OpenRouter-compatible chat completion API
pub struct AssistantClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    referer: String,
    title: String,
    client: Client,
}

impl AssistantClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.assistant_timeout)
            .build()?;

        Ok(Self {
            api_key: config.openrouter_api_key.clone(),
            model: config.openrouter_model.clone(),
            endpoint: config.openrouter_url.clone(),
            referer: config.openrouter_referer.clone(),
            title: config.openrouter_title.clone(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the request, call upstream once, and relay the first choice.
    pub async fn answer(&self, request: AssistantRequest) -> Result<AssistantResponse> {
        let prompt = request.prompt.as_deref().unwrap_or_default().trim();
        if prompt.is_empty() {
            return Err(AppError::Validation("Prompt required".to_string()));
        }

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Misconfigured("No OPENROUTER_API_KEY set in environment".to_string())
        })?;

        let max_tokens = max_tokens_for(request.length_hint);
        info!(
            "Assistant request: {} chars, length_hint={}, max_tokens={}",
            prompt.len(),
            request.length_hint,
            max_tokens
        );

        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens,
            top_p: TOP_P,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER)
                .to_string();
            return Err(AppError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Chat completion API error: {} - {}", status, body);
            return Err(AppError::Upstream(format!(
                "upstream returned status {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("invalid response body: {}", e)))?;

        let text = completion.into_text();
        debug!("Assistant reply: {} chars", text.len());

        Ok(AssistantResponse {
            text,
            model_used: self.model.clone(),
        })
    }
}
