use async_trait::async_trait;
use crate::CoreResult;

/// Language-model agent that answers free-form travel prompts.
#[async_trait]
pub trait TravelAgent: Send + Sync {
    async fn chat(&self, prompt: &str) -> CoreResult<String>;
}
