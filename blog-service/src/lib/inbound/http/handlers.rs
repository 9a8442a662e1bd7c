use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::blog::errors::BlogError;
use crate::blog::models::Blog;
use crate::blog::models::BlogOwner;
use crate::blog::models::BlogWithOwner;
use crate::user::errors::UserError;
use crate::user::models::UserWithBlogs;

pub mod add_comment;
pub mod create_blog;
pub mod create_user;
pub mod delete_blog;
pub mod list_blogs;
pub mod list_users;
pub mod login;
pub mod reset;
pub mod update_blog;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure the API reports. The display text is the client-facing
/// `error` message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("malformatted id")]
    MalformattedId,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    DuplicateEntry(String),

    #[error("token missing or invalid")]
    TokenInvalid,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    Forbidden(String),

    #[error("unknown endpoint")]
    UnknownEndpoint,

    /// Detail is logged, never returned.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformattedId | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEntry(_) => StatusCode::CONFLICT,
            ApiError::TokenInvalid | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(format!("{:#}", e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Internal(detail) => {
                tracing::error!(status = status.as_u16(), error = %detail, "Request failed");
            }
            _ => {
                tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
            }
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(_) | UserError::InvalidPassword(_) => {
                ApiError::Validation(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) => ApiError::DuplicateEntry(err.to_string()),
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::UnknownEndpoint
            }
            UserError::Hashing(_) | UserError::DatabaseError(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::InvalidBlogId(_) => ApiError::MalformattedId,
            BlogError::Validation(_) => ApiError::Validation(err.to_string()),
            BlogError::NotFound(_) => ApiError::UnknownEndpoint,
            BlogError::Forbidden { .. } => ApiError::Forbidden(err.to_string()),
            // the token outlived its user
            BlogError::OwnerNotFound(_) => ApiError::TokenInvalid,
            BlogError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Fallback for every unmatched route or method.
pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogResponseData {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user: Option<BlogOwnerData>,
    pub comments: Vec<String>,
}

impl From<&BlogWithOwner> for BlogResponseData {
    fn from(value: &BlogWithOwner) -> Self {
        let blog = &value.blog;
        Self {
            id: blog.id.to_string(),
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
            user: value.owner.as_ref().map(BlogOwnerData::from),
            comments: blog.comments.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogOwnerData {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&BlogOwner> for BlogOwnerData {
    fn from(owner: &BlogOwner) -> Self {
        Self {
            id: owner.id.to_string(),
            username: owner.username.clone(),
            name: owner.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub blogs: Vec<UserBlogData>,
}

impl From<&UserWithBlogs> for UserResponseData {
    fn from(value: &UserWithBlogs) -> Self {
        let user = &value.user;
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            name: user.name.clone(),
            blogs: value.blogs.iter().map(UserBlogData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBlogData {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl From<&Blog> for UserBlogData {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            url: blog.url.clone(),
            title: blog.title.clone(),
            author: blog.author.clone(),
        }
    }
}
