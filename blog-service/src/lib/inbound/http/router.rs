use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_comment::add_comment;
use super::handlers::create_blog::create_blog;
use super::handlers::create_user::create_user;
use super::handlers::delete_blog::delete_blog;
use super::handlers::list_blogs::list_blogs;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::reset::reset;
use super::handlers::unknown_endpoint;
use super::handlers::update_blog::update_blog;
use super::middleware::extract_token;
use super::middleware::log_request_body;
use super::middleware::require_user;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<dyn BlogServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the HTTP application.
///
/// `testing_routes` mounts `POST /api/testing/reset`.
pub fn create_router(
    blog_service: Arc<dyn BlogServicePort>,
    user_service: Arc<dyn UserServicePort>,
    authenticator: Arc<Authenticator>,
    testing_routes: bool,
) -> Router {
    let state = AppState {
        blog_service,
        user_service,
        authenticator,
    };

    let auth_layer = middleware::from_fn_with_state(state.clone(), require_user);

    let mut router = Router::new()
        .route(
            "/api/blogs",
            get(list_blogs)
                .merge(post(create_blog).route_layer(auth_layer.clone()))
                .fallback(unknown_endpoint),
        )
        .route(
            "/api/blogs/:id",
            put(update_blog)
                .merge(delete(delete_blog).route_layer(auth_layer))
                .fallback(unknown_endpoint),
        )
        .route(
            "/api/blogs/:id/comments",
            post(add_comment).fallback(unknown_endpoint),
        )
        .route(
            "/api/users",
            get(list_users)
                .post(create_user)
                .fallback(unknown_endpoint),
        )
        .route("/api/login", post(login).fallback(unknown_endpoint));

    if testing_routes {
        tracing::warn!("Testing routes enabled");
        router = router.route("/api/testing/reset", post(reset).fallback(unknown_endpoint));
    }

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                let size = response
                    .headers()
                    .get(header::CONTENT_LENGTH)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info!(
                    status = response.status().as_u16(),
                    size = %size,
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    router
        .fallback(unknown_endpoint)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(extract_token))
                .layer(middleware::from_fn(log_request_body)),
        )
        .with_state(state)
}
