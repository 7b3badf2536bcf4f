use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use sendero_core::{CoreError, CoreResult, TravelAgent};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::app_config::AgentConfig;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    system_prompt: &'a str,
    message: &'a str,
    tools: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Client for the external agent service that runs the reasoning loop.
///
/// Each call sends the system prompt, the tool catalogue and one user message,
/// and returns the agent's final answer verbatim.
pub struct HttpAgentClient {
    client: ReqwestClient,
    base_url: String,
    api_key: Option<String>,
    system_prompt: String,
    tools: serde_json::Value,
}

impl HttpAgentClient {
    pub fn new(config: &AgentConfig, system_prompt: String, tools: serde_json::Value) -> CoreResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| CoreError::AgentError(format!("building HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            system_prompt,
            tools,
        })
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}

#[async_trait]
impl TravelAgent for HttpAgentClient {
    async fn chat(&self, prompt: &str) -> CoreResult<String> {
        let body = ChatRequest {
            system_prompt: &self.system_prompt,
            message: prompt,
            tools: &self.tools,
        };

        let mut request = self.client.post(self.chat_url()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!("Sending prompt to agent at {}", self.base_url);
        let response = request
            .send()
            .await
            .map_err(|e| CoreError::AgentError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Agent returned {}: {}", status, error_text);
            return Err(CoreError::AgentError(format!("agent returned {}: {}", status, error_text)));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| CoreError::AgentError(format!("malformed agent response: {}", e)))?;

        Ok(reply.response)
    }
}
