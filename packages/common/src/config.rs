use std::time::Duration;

use serde::Deserialize;

/// Settings for the two outbound calls made while generating an article.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// oEmbed endpoint queried for the video title. Default: YouTube's public endpoint.
    #[serde(default = "default_oembed_url")]
    pub oembed_url: String,
    /// Seconds to wait for the oEmbed lookup. Default: 10.
    #[serde(default = "default_oembed_timeout_secs")]
    pub oembed_timeout_secs: u64,
    /// Chat-completion endpoint. Default: OpenRouter.
    #[serde(default = "default_completion_url")]
    pub completion_url: String,
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on generated tokens. Default: 300.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Seconds to wait for the completion round trip. Default: 60.
    #[serde(default = "default_completion_timeout_secs")]
    pub completion_timeout_secs: u64,
    /// Bearer token for the completion API. Generation fails without it.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_oembed_url() -> String {
    "https://www.youtube.com/oembed".into()
}
fn default_oembed_timeout_secs() -> u64 {
    10
}
fn default_completion_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".into()
}
fn default_model() -> String {
    "mistralai/mixtral-8x7b-instruct".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    300
}
fn default_completion_timeout_secs() -> u64 {
    60
}

impl GeneratorConfig {
    pub fn oembed_timeout(&self) -> Duration {
        Duration::from_secs(self.oembed_timeout_secs)
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// The configured API key, treating a blank value as absent.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            oembed_url: default_oembed_url(),
            oembed_timeout_secs: default_oembed_timeout_secs(),
            completion_url: default_completion_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            completion_timeout_secs: default_completion_timeout_secs(),
            api_key: None,
        }
    }
}
