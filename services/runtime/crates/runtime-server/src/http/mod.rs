//! HTTP surface — axum router, shared state, and error mapping.
//!
//! The security context consumed by audit resolution arrives as an optional
//! request extension inserted by whatever fronting authentication layer the
//! deployment runs; this module never produces one itself.

pub mod handlers;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::application::ports::AppDeployer;
use crate::domain::RuntimeError;

/// Shared state behind every runtime route.
pub struct ServerState<D> {
    /// The deployer port implementation.
    pub deployer: D,
    /// Externally configured auditing/authentication flag, read once per
    /// auditor resolution.
    pub auditing_enabled: bool,
}

/// Compose the runtime router over any deployer port implementation.
pub fn router<D>(state: Arc<ServerState<D>>) -> Router
where
    D: AppDeployer + 'static,
{
    Router::new()
        .route("/health", get(handlers::handle_health))
        .route(
            "/runtime/apps/{app_id}/instances",
            get(handlers::handle_list_instances::<D>),
        )
        .route(
            "/runtime/apps/{app_id}/instances/{instance_id}",
            get(handlers::handle_get_instance::<D>),
        )
        .route(
            "/runtime/apps/{app_id}/instances/{instance_id}/actuator",
            get(handlers::handle_actuator_get::<D>).post(handlers::handle_actuator_post::<D>),
        )
        .fallback(handlers::handle_not_found)
        .with_state(state)
}

/// Construct a JSON error response with the given status code and message.
pub(crate) fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

impl IntoResponse for RuntimeError {
    fn into_response(self) -> Response {
        let status = match &self {
            RuntimeError::AppNotFound(_) | RuntimeError::InstanceNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            RuntimeError::Deployer(cause) => {
                tracing::error!(error = %cause, "deployer call failed");
                StatusCode::BAD_GATEWAY
            }
        };
        json_error(status, &self.to_string()).into_response()
    }
}
