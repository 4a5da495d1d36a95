//! The conversational rewrite of match results.
//!
//! Rendering happens locally ([`crate::render`]); phrasing is delegated to
//! a text-generation service behind the [`Narrator`] trait.
//! [`anthropic::AnthropicNarrator`] is the real implementation,
//! [`mock::MockNarrator`] a scripted one for tests.

pub mod anthropic;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::store::UserProfile;

/// System instruction sent with every narration request.
pub const SYSTEM_PROMPT: &str =
    "You are a friendly AI assistant helping students find internships in India.";

/// Build the single user prompt: a profile dump plus the rendered results.
pub fn build_prompt(profile: &UserProfile, results: &str) -> Result<String> {
    let dump = serde_json::to_string(profile)?;
    Ok(format!(
        "User: {dump}\nResults:\n{results}\nRespond politely and concisely."
    ))
}

/// Phrases rendered results conversationally. One call per session; any
/// failure propagates and ends the session.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn narrate(&self, profile: &UserProfile, results: &str) -> Result<String>;
}
