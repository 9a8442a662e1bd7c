use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BlogResponseData;
use crate::domain::blog::errors::BlogValidationError;
use crate::domain::blog::models::CreateBlogCommand;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_blog(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CreateBlogRequest>,
) -> Result<ApiSuccess<BlogResponseData>, ApiError> {
    state
        .blog_service
        .create_blog(&user.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}

/// HTTP request body for creating a blog (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateBlogRequest {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<i64>,
}

impl CreateBlogRequest {
    fn try_into_command(self) -> Result<CreateBlogCommand, BlogValidationError> {
        CreateBlogCommand::new(self.title, self.author, self.url, self.likes)
    }
}

impl From<BlogValidationError> for ApiError {
    fn from(err: BlogValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}
