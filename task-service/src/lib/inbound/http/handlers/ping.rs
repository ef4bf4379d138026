use axum::http::StatusCode;

/// Liveness probe.
pub async fn ping() -> StatusCode {
    StatusCode::OK
}
