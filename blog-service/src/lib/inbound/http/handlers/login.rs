use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::errors::UserError;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Unknown user, missing password and wrong password all look the same
    let username = body.username.unwrap_or_default();
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => ApiError::InvalidCredentials,
            _ => ApiError::from(e),
        })?;
    let password = body.password.ok_or(ApiError::InvalidCredentials)?;

    let authenticator = Arc::clone(&state.authenticator);
    let password_hash = user.password_hash.clone();
    let user_id = user.id;
    let result = tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&password, &password_hash, user_id, username)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Login task failed: {}", e)))?
    .map_err(|e| match e {
        auth::AuthenticationError::InvalidCredentials => ApiError::InvalidCredentials,
        auth::AuthenticationError::PasswordError(err) => {
            ApiError::Internal(format!("Password verification failed: {}", err))
        }
        auth::AuthenticationError::JwtError(err) => {
            ApiError::Internal(format!("Token generation failed: {}", err))
        }
    })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
            username: user.username.as_str().to_string(),
            name: user.name,
        },
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
