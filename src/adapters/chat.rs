use crate::config::store_config::ChatConfig;
use crate::domain::ports::ChatService;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MISSING_KEY_REPLY: &str =
    "I'm sorry, my AI brain isn't connected right now (Missing API Key).";
pub const EMPTY_REPLY: &str = "I couldn't think of an answer right now.";
pub const FAILURE_REPLY: &str =
    "Oops! I'm having trouble connecting to the organic knowledge base.";

const DEFAULT_CONTEXT: &str = "General inquiry about organic products.";

/// Builds the assistant prompt around the shopper's question.
pub fn build_prompt(prompt: &str, context: Option<&str>) -> String {
    let context = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CONTEXT);

    format!(
        "You are \"Verdie\", a helpful, friendly AI assistant for Village Organics.\n\
         Your goal is to promote organic living, health, and sustainable farming.\n\
         Context: {context}\n\
         User Question: {prompt}\n\
         \n\
         Keep your answer concise (under 100 words unless asked for a recipe), warm, and scientifically accurate but accessible.\n\
         If asked for a recipe, provide a simple, healthy one using organic ingredients."
    )
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Client for a Gemini-style `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiChat {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiChat {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let api_key = config.resolved_api_key();
        if api_key.is_none() {
            tracing::warn!("No chat API key configured; replies will use the offline message");
        }

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!("Making chat request to: {}", self.url());
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Chat response status: {}", response.status());
        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.text())
    }
}

#[async_trait]
impl ChatService for GeminiChat {
    async fn reply(&self, prompt: &str, context: Option<&str>) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return MISSING_KEY_REPLY.to_string();
        };

        match self.generate(api_key, &build_prompt(prompt, context)).await {
            Ok(text) if text.is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Chat API error: {}", e);
                FAILURE_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_uses_default_context() {
        let prompt = build_prompt("Is A2 milk better?", None);
        assert!(prompt.contains("Context: General inquiry about organic products."));
        assert!(prompt.contains("User Question: Is A2 milk better?"));
        assert!(prompt.starts_with("You are \"Verdie\""));

        let blank = build_prompt("hi", Some("  "));
        assert!(blank.contains(DEFAULT_CONTEXT));
    }

    #[test]
    fn test_prompt_includes_given_context() {
        let prompt = build_prompt("What goes with quinoa?", Some("Viewing Red Quinoa"));
        assert!(prompt.contains("Context: Viewing Red Quinoa"));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"there"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text(), "Hello there");

        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), "");
    }

    #[tokio::test]
    async fn test_missing_key_returns_fixed_reply() {
        let chat = GeminiChat {
            client: Client::new(),
            endpoint: "http://127.0.0.1:1".to_string(),
            model: "m".to_string(),
            api_key: None,
        };
        assert!(!chat.is_connected());
        assert_eq!(chat.reply("hello", None).await, MISSING_KEY_REPLY);
    }
}
