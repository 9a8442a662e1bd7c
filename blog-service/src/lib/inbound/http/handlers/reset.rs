use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// Empties both collections. Mounted only when testing routes are enabled.
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state
        .blog_service
        .delete_all_blogs()
        .await
        .context("clearing blogs")?;
    state
        .user_service
        .delete_all_users()
        .await
        .context("clearing users")?;

    tracing::info!("Storage reset");

    Ok(StatusCode::NO_CONTENT)
}
