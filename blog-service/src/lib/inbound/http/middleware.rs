use axum::body::Body;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use serde_json::Value;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Largest body the request logger will buffer.
const MAX_LOGGED_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Bearer token found on the request, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub Option<String>);

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Records the bearer token from `Authorization`, never rejecting.
pub async fn extract_token(mut req: Request, next: Next) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string);

    req.extensions_mut().insert(BearerToken(token));

    next.run(req).await
}

fn bearer_token(value: &str) -> Option<&str> {
    let prefix = value.get(..7)?;
    prefix
        .eq_ignore_ascii_case("bearer ")
        .then(|| &value[7..])
}

/// Validates the recorded token and adds the user to request extensions.
pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .extensions()
        .get::<BearerToken>()
        .and_then(|bearer| bearer.0.as_deref())
        .ok_or(ApiError::TokenInvalid)?;

    let identity = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::TokenInvalid
    })?;

    let user_id = UserId::from_string(&identity.id).map_err(|e| {
        tracing::warn!(error = %e, "Token carries an unparseable user id");
        ApiError::TokenInvalid
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: identity.username,
    });

    Ok(next.run(req).await)
}

/// Logs the JSON body of POST requests with any password redacted.
pub async fn log_request_body(req: Request, next: Next) -> Response {
    if req.method() != Method::POST {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_LOGGED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => return ApiError::Validation(e.to_string()).into_response(),
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => tracing::debug!(body = %redact(value), "Request body"),
        Err(_) => tracing::debug!(bytes = bytes.len(), "Request body is not JSON"),
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn redact(mut value: Value) -> Value {
    if let Some(password) = value.get_mut("password") {
        *password = Value::String("[redacted]".to_string());
    }
    value
}
