use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;

/// Writes a short description for a video given its title.
#[async_trait]
pub trait ArticleGenerator: Send + Sync {
    async fn generate_article(&self, title: &str) -> Result<String, GenerationError>;
}

/// Builds the fixed user prompt sent to the completion API.
pub fn build_prompt(title: &str) -> String {
    format!(
        "Write a SHORT blog-style description (4 to 5 lines only) for the following YouTube video.\n\
         \n\
         Video Title:\n\
         {title}\n\
         \n\
         Rules:\n\
         - Title first\n\
         - Max 5 lines\n\
         - Simple English\n\
         - No markdown\n"
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
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

/// [`ArticleGenerator`] that calls an OpenAI-compatible chat-completion endpoint.
pub struct ChatCompletionGenerator {
    client: Client,
    config: GeneratorConfig,
}

impl ChatCompletionGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.completion_timeout())
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ArticleGenerator for ChatCompletionGenerator {
    #[instrument(skip(self), fields(model = %self.config.model))]
    async fn generate_article(&self, title: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .usable_api_key()
            .ok_or(GenerationError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(title),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.completion_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                GenerationError::MalformedResponse("no completion content".to_string())
            })?;

        debug!(chars = content.len(), "Completion received");
        Ok(content)
    }
}
