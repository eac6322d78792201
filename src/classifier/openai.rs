use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{Classifier, ClassifierError};
use crate::config::ClassifierSettings;

/// Classifier backed by an OpenAI-compatible chat-completions endpoint.
///
/// One request per call, no retries. The HTTP client is only built when a
/// call is made, so always-safe tools never pay for TLS setup.
#[derive(Debug)]
pub struct OpenAiClassifier {
    settings: ClassifierSettings,
}

impl OpenAiClassifier {
    /// A missing API key is not an error here; it is reported on the first
    /// [`Classifier::classify`] call.
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    fn client(&self) -> Result<Client, ClassifierError> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = self.settings.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms.max(1)));
        }
        Ok(builder.build()?)
    }

    fn chat_completions_url(&self) -> String {
        let base = self.settings.api_base.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            return base.to_string();
        }
        format!("{base}/chat/completions")
    }

    fn headers(&self) -> Result<HeaderMap, ClassifierError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ClassifierError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                ClassifierError::InvalidResponse(format!("invalid API key header: {e}"))
            })?,
        );
        if let Some(org) = &self.settings.organization {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(org).map_err(|e| {
                    ClassifierError::InvalidResponse(format!("invalid organization header: {e}"))
                })?,
            );
        }
        Ok(headers)
    }
}

impl Classifier for OpenAiClassifier {
    fn classify(&self, prompt: &str) -> Result<String, ClassifierError> {
        let headers = self.headers()?;
        let client = self.client()?;
        let body = build_request_body(&self.settings, prompt);
        let url = self.chat_completions_url();

        tracing::debug!(%url, model = %self.settings.model, "sending classifier request");
        let response = client.post(&url).headers(headers).json(&body).send()?;

        let status = response.status();
        let raw = response.text()?;
        if !status.is_success() {
            return Err(ClassifierError::HttpStatus {
                status: status.as_u16(),
                body: raw,
            });
        }
        parse_chat_response(&raw)
    }
}

fn build_request_body(settings: &ClassifierSettings, prompt: &str) -> Value {
    json!({
        "model": settings.model,
        "max_tokens": settings.max_tokens,
        "response_format": { "type": "json_object" },
        "messages": [
            { "role": "user", "content": prompt }
        ],
    })
}

/// Pull the first choice's text out of a chat-completions response.
/// A response with no choices or no content yields an empty string.
fn parse_chat_response(raw: &str) -> Result<String, ClassifierError> {
    let parsed: ChatResponse = serde_json::from_str(raw).map_err(|e| {
        ClassifierError::InvalidResponse(format!("not a chat completion: {e}"))
    })?;
    Ok(parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
