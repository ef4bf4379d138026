use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_task::create_task;
use super::handlers::delete_task::delete_task;
use super::handlers::get_task::get_task;
use super::handlers::list_tasks::list_tasks;
use super::handlers::ping::ping;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::update_task::update_task;
use super::middleware::authenticate as auth_middleware;
use crate::auth::ports::AuthServicePort;
use crate::task::ports::TaskServicePort;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub task_service: Arc<dyn TaskServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let public_routes = Router::new()
        .route("/ping", get(ping))
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in));

    let protected_routes = Router::new()
        .route("/api/v1/tasks", post(create_task).get(list_tasks))
        .route(
            "/api/v1/tasks/:task_id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.auth_service),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
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
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
