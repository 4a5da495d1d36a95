use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::store::UserProfile;

use super::{build_prompt, Narrator};

/// A scripted narrator for tests. Returns a fixed reply and records every
/// prompt it was asked to phrase.
pub struct MockNarrator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl MockNarrator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Narrator for MockNarrator {
    async fn narrate(&self, profile: &UserProfile, results: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(build_prompt(profile, results)?);
        Ok(self.reply.clone())
    }
}
