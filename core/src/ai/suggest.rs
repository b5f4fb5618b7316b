//! Priority suggestion client
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. One request
//! per call, no retry. The model is constrained to answer with one of the
//! three priority labels; anything else from a completed request falls
//! back to Medium, while transport failures surface as errors so the
//! caller can tell the user instead of showing a fabricated label.

use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

use crate::task::Priority;
use crate::{Error, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
const DEFAULT_MODEL: &str = "llama3.2";

/// Configuration for the suggestion client
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Bearer token, if the endpoint requires one
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for requesting a priority suggestion
pub struct SuggestClient {
    config: SuggestConfig,
    client: reqwest::Client,
}

impl SuggestClient {
    /// Create a new suggestion client
    pub fn new(config: SuggestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Suggestion(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Suggest a priority for a task description
    ///
    /// Returns one of High, Medium, or Low — never None. Invalid model
    /// output from a completed request becomes Medium; a failed request
    /// becomes an error.
    pub async fn suggest(&self, description: &str) -> Result<Priority> {
        if description.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Task description cannot be empty".to_string(),
            ));
        }

        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "user", "content": build_prompt(description)}
            ],
            "temperature": 0.1,
        });

        let mut request = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .header("Content-Type", "application/json")
            .json(&body);

        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Suggestion(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Suggestion(format!(
                "Model returned HTTP {}",
                response.status()
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Suggestion(format!("Failed to parse response: {}", e)))?;

        let content = extract_content(&data).unwrap_or_default();
        debug!("Suggestion model answered: {:?}", content);

        match Priority::parse_label(content) {
            Some(priority) => Ok(priority),
            None => {
                warn!(
                    "Model output {:?} is not a valid priority label, falling back to Medium",
                    content
                );
                Ok(Priority::Medium)
            }
        }
    }
}

/// Build the instruction prompt for a task description
fn build_prompt(description: &str) -> String {
    format!(
        "You are an expert project manager. Based on the following task \
         description, suggest a priority level. The priority can only be \
         'Low', 'Medium', or 'High'. Analyze the task for urgency, \
         importance, and keywords that imply deadlines or significant \
         impact. For example, tasks with words like 'report', 'urgent', \
         'deadline', 'blocker' should be high priority. Tasks about \
         planning or brainstorming can be lower priority.\n\n\
         Task: \"{}\"\n\n\
         Respond with exactly one word: Low, Medium, or High.",
        description
    )
}

/// Pull the assistant message text out of a chat-completions response
fn extract_content(data: &serde_json::Value) -> Option<&str> {
    data.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}
