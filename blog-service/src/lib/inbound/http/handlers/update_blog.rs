use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BlogResponseData;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;

/// Overwrites `likes`; no other field of the body is applied.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
    JsonBody(body): JsonBody<UpdateBlogRequest>,
) -> Result<ApiSuccess<BlogResponseData>, ApiError> {
    let blog_id = BlogId::from_string(&blog_id).map_err(BlogError::from)?;

    state
        .blog_service
        .update_likes(&blog_id, body.likes)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateBlogRequest {
    likes: Option<i64>,
}
