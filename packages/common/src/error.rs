use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Completion API key is not configured")]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}
