use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::BlogResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BlogResponseData>>, ApiError> {
    state
        .blog_service
        .list_blogs()
        .await
        .map_err(ApiError::from)
        .map(|blogs| {
            ApiSuccess::new(
                StatusCode::OK,
                blogs.iter().map(BlogResponseData::from).collect(),
            )
        })
}
