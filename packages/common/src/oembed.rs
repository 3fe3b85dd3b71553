use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{instrument, warn};

use crate::config::GeneratorConfig;

/// Title stored when the oEmbed lookup cannot produce one.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Resolves the human-readable title of a video link.
///
/// Implementations never fail: any lookup problem yields [`UNKNOWN_TITLE`].
#[async_trait]
pub trait TitleResolver: Send + Sync {
    async fn resolve_title(&self, link: &str) -> String;
}

#[derive(Debug, Error)]
enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response has no title")]
    MissingTitle,
}

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: Option<String>,
}

/// [`TitleResolver`] backed by a public oEmbed endpoint.
pub struct OembedTitleResolver {
    client: Client,
    endpoint: String,
}

impl OembedTitleResolver {
    pub fn new(config: &GeneratorConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.oembed_timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.oembed_url.clone(),
        })
    }

    async fn lookup(&self, link: &str) -> Result<String, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", link), ("format", "json")])
            .send()
            .await?
            .error_for_status()?;

        let body: OembedResponse = response.json().await?;

        body.title.ok_or(LookupError::MissingTitle)
    }
}

#[async_trait]
impl TitleResolver for OembedTitleResolver {
    #[instrument(skip(self))]
    async fn resolve_title(&self, link: &str) -> String {
        match self.lookup(link).await {
            Ok(title) => title,
            Err(e) => {
                warn!(error = %e, "Title lookup failed, using placeholder");
                UNKNOWN_TITLE.to_string()
            }
        }
    }
}
