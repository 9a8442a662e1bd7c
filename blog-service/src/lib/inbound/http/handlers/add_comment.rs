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

pub async fn add_comment(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
    JsonBody(body): JsonBody<AddCommentRequest>,
) -> Result<ApiSuccess<BlogResponseData>, ApiError> {
    let blog_id = BlogId::from_string(&blog_id).map_err(BlogError::from)?;

    state
        .blog_service
        .add_comment(&blog_id, body.comment)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddCommentRequest {
    comment: Option<String>,
}
