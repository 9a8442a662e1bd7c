use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserWithBlogs;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let user = state.user_service.register_user(body.into()).await?;

    // a fresh account has no blogs to resolve
    let registered = UserWithBlogs {
        user,
        blogs: Vec::new(),
    };

    Ok(ApiSuccess::new(StatusCode::CREATED, (&registered).into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: Option<String>,
    name: Option<String>,
    password: Option<String>,
}

impl From<CreateUserRequest> for RegisterUserCommand {
    fn from(body: CreateUserRequest) -> Self {
        Self {
            username: body.username,
            name: body.name,
            password: body.password,
        }
    }
}
