use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::entity::blog_article;
use crate::error::AppError;
use crate::models::shared::Pagination;

/// Request body for article generation.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct GenerateArticleRequest {
    /// Video URL. Not validated beyond being present.
    #[schema(example = "https://youtu.be/dQw4w9WgXcQ")]
    #[serde(default)]
    pub link: Option<String>,
}

/// Returns the trimmed link, or a validation error when it is absent or blank.
pub fn require_link(payload: &GenerateArticleRequest) -> Result<String, AppError> {
    payload
        .link
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::Validation("No link provided".into()))
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct GenerateArticleResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Identifier of the stored article.
    #[schema(example = 17)]
    pub blog_id: i32,
}

/// A stored article as returned to its owner.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogResponse {
    #[schema(example = 17)]
    pub id: i32,
    #[schema(example = "https://youtu.be/dQw4w9WgXcQ")]
    pub youtube_link: String,
    #[schema(example = "Sample Video")]
    pub youtube_title: String,
    #[schema(example = "Sample Video\nA short description of the video.")]
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<blog_article::Model> for BlogResponse {
    fn from(m: blog_article::Model) -> Self {
        Self {
            id: m.id,
            youtube_link: m.youtube_link,
            youtube_title: m.youtube_title,
            content: m.content,
            created_at: m.created_at,
        }
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogListQuery {
    /// Page number (1-based). Default: 1.
    pub page: Option<u64>,
    /// Items per page, 1-100. Default: 20.
    pub per_page: Option<u64>,
}

impl BlogListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(20).clamp(1, 100)
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogListResponse {
    pub data: Vec<BlogResponse>,
    pub pagination: Pagination,
}
