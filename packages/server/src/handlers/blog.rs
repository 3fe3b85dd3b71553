use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::blog_article;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::blog::*;
use crate::models::shared::Pagination;
use crate::state::AppState;

/// Resolve the title, generate the description, then store one row.
///
/// Title lookup never fails the request. Generation failures abort before
/// anything is written and surface as a generic 500.
#[utoipa::path(
    post,
    path = "/generate-article/",
    tag = "Blogs",
    operation_id = "generateArticle",
    summary = "Generate and store a description for a video link",
    request_body = GenerateArticleRequest,
    responses(
        (status = 200, description = "Article stored", body = GenerateArticleResponse),
        (status = 400, description = "No link provided (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "TOKEN_MISSING or TOKEN_INVALID", body = ErrorBody),
        (status = 500, description = "Generation failed (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("session" = []), ("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn generate_article(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateArticleRequest>,
) -> Result<Json<GenerateArticleResponse>, AppError> {
    let link = require_link(&payload)?;

    let title = state.titles.resolve_title(&link).await;
    let content = state.generator.generate_article(&title).await?;

    let blog = blog_article::ActiveModel {
        user_id: Set(auth_user.user_id),
        youtube_link: Set(link),
        youtube_title: Set(title),
        content: Set(content),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(blog_id = blog.id, "Article stored");

    Ok(Json(GenerateArticleResponse {
        success: true,
        blog_id: blog.id,
    }))
}

#[utoipa::path(
    get,
    path = "/blog/{id}/",
    tag = "Blogs",
    operation_id = "getBlog",
    summary = "Get one of your articles",
    description = "Returns 404 both for unknown ids and for articles owned by another account.",
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article", body = BlogResponse),
        (status = 401, description = "TOKEN_MISSING or TOKEN_INVALID", body = ErrorBody),
        (status = 404, description = "NOT_FOUND", body = ErrorBody),
    ),
    security(("session" = []), ("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn get_blog(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = blog_article::Entity::find_by_id(id)
        .filter(blog_article::Column::UserId.eq(auth_user.user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))?;

    Ok(Json(BlogResponse::from(blog)))
}

#[utoipa::path(
    get,
    path = "/blogs/",
    tag = "Blogs",
    operation_id = "listBlogs",
    summary = "List your articles, newest first",
    params(BlogListQuery),
    responses(
        (status = 200, description = "Page of articles", body = BlogListResponse),
        (status = 400, description = "Malformed query (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "TOKEN_MISSING or TOKEN_INVALID", body = ErrorBody),
    ),
    security(("session" = []), ("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = auth_user.user_id))]
pub async fn list_blogs(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BlogListQuery>,
) -> Result<Json<BlogListResponse>, AppError> {
    let page = query.page();
    let per_page = query.per_page();

    let paginator = blog_article::Entity::find()
        .filter(blog_article::Column::UserId.eq(auth_user.user_id))
        .order_by_desc(blog_article::Column::CreatedAt)
        .order_by_desc(blog_article::Column::Id)
        .paginate(&state.db, per_page);

    let total = paginator.num_items().await?;
    let pagination = Pagination::new(page, per_page, total);

    let rows = if pagination.has_rows() {
        paginator.fetch_page(page - 1).await?
    } else {
        Vec::new()
    };

    Ok(Json(BlogListResponse {
        data: rows.into_iter().map(BlogResponse::from).collect(),
        pagination,
    }))
}
