use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MODEL;
use crate::store::UserProfile;

use super::{build_prompt, Narrator, SYSTEM_PROMPT};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// A narrator that calls the Anthropic Messages API.
///
/// One request per session, no retries, no timeout. Errors carry the HTTP
/// status and response body.
pub struct AnthropicNarrator {
    model: String,
    api_key: String,
}

impl AnthropicNarrator {
    pub fn new(model: Option<String>, api_key: String) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        }
    }

    /// The model this narrator will ask for.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Narrator for AnthropicNarrator {
    async fn narrate(&self, profile: &UserProfile, results: &str) -> Result<String> {
        let prompt = build_prompt(profile, results)?;

        let messages = [Message {
            role: "user".to_string(),
            content: prompt,
        }];
        let body = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: SYSTEM_PROMPT,
            messages: &messages,
        };

        let client = reqwest::Client::new();
        let resp = client
            .post(API_URL)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("Anthropic API error ({}): {}", status, text);
        }

        let api_resp: ApiResponse = resp.json().await?;

        // Concatenate the text blocks
        let text: String = api_resp
            .content
            .iter()
            .filter_map(|block| {
                if block.content_type == "text" {
                    block.text.as_deref()
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            bail!("Anthropic API returned empty response");
        }

        if let Some(usage) = api_resp.usage {
            eprintln!(
                "  [tokens] input: {}, output: {}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(text)
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [Message],
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}
