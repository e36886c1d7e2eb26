//! Runtime route handlers: instance listing, single-instance display, and
//! actuator proxying.

use std::sync::Arc;

use armada_common::ActuatorPostRequest;
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use super::{ServerState, json_error};
use crate::application::ports::AppDeployer;
use crate::application::services::instance_status;
use crate::domain::page::{Page, PageRequest};
use crate::domain::{InstanceStatusResource, RuntimeError, SecurityContext, resolve_auditor};

/// Page window query parameters, both optional.
#[derive(Debug, Deserialize)]
pub(crate) struct PageParams {
    page: Option<usize>,
    size: Option<usize>,
}

impl PageParams {
    fn window(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
    }
}

/// Query parameter addressing one management endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ActuatorParams {
    endpoint: String,
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// Minimal health-check handler for load-balancer probes.
pub(crate) async fn handle_health() -> StatusCode {
    StatusCode::OK
}

/// GET /runtime/apps/{app_id}/instances
pub(crate) async fn handle_list_instances<D: AppDeployer + 'static>(
    State(state): State<Arc<ServerState<D>>>,
    Path(app_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<InstanceStatusResource>>, RuntimeError> {
    let page =
        instance_status::list_instances(&state.deployer, &app_id, params.window()).await?;
    Ok(Json(page))
}

/// GET /runtime/apps/{app_id}/instances/{instance_id}
pub(crate) async fn handle_get_instance<D: AppDeployer + 'static>(
    State(state): State<Arc<ServerState<D>>>,
    Path((app_id, instance_id)): Path<(String, String)>,
) -> Result<Json<InstanceStatusResource>, RuntimeError> {
    let resource =
        instance_status::get_instance(&state.deployer, &app_id, &instance_id).await?;
    Ok(Json(resource))
}

/// GET /runtime/apps/{app_id}/instances/{instance_id}/actuator?endpoint=
///
/// Returns the instance's raw textual payload unmodified.
pub(crate) async fn handle_actuator_get<D: AppDeployer + 'static>(
    State(state): State<Arc<ServerState<D>>>,
    Path((app_id, instance_id)): Path<(String, String)>,
    Query(params): Query<ActuatorParams>,
) -> Result<String, RuntimeError> {
    instance_status::actuator_get(&state.deployer, &app_id, &instance_id, &params.endpoint).await
}

/// POST /runtime/apps/{app_id}/instances/{instance_id}/actuator
///
/// Resolves the acting user from the request's security context and records
/// it on the log record before forwarding the write.
pub(crate) async fn handle_actuator_post<D: AppDeployer + 'static>(
    State(state): State<Arc<ServerState<D>>>,
    Path((app_id, instance_id)): Path<(String, String)>,
    context: Option<Extension<SecurityContext>>,
    Json(request): Json<ActuatorPostRequest>,
) -> Result<StatusCode, RuntimeError> {
    let auditor = resolve_auditor(
        state.auditing_enabled,
        context.as_ref().map(|Extension(context)| context),
    );
    tracing::info!(
        app_id = %app_id,
        instance_id = %instance_id,
        endpoint = %request.endpoint,
        auditor = auditor.as_deref().unwrap_or("-"),
        "forwarding actuator write",
    );
    instance_status::actuator_post(&state.deployer, &app_id, &instance_id, &request).await?;
    Ok(StatusCode::CREATED)
}
