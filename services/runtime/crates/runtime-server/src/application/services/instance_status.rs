//! Application service — runtime instance status use-cases.
//!
//! Turns an app identifier into ordered, paginated, presentable instance
//! data, and routes actuator calls to one instance. All I/O goes through
//! the injected [`AppDeployer`] port.

use armada_common::{ActuatorPostRequest, AppStatus, DeploymentState};

use crate::application::ports::AppDeployer;
use crate::domain::instance::{InstanceStatusResource, sorted_instances, to_resource};
use crate::domain::page::{Page, PageRequest, paginate};
use crate::domain::RuntimeError;

/// Fetch the snapshot for `app_id`, failing when the app is unknown.
///
/// The port already reports "no such app" as `None`; a snapshot that still
/// carries the legacy `Unknown` aggregate state is treated identically, so
/// the sentinel cannot leak through a non-collapsing port implementation.
async fn deployed_status(
    deployer: &impl AppDeployer,
    app_id: &str,
) -> Result<AppStatus, RuntimeError> {
    match deployer.app_status(app_id).await? {
        Some(status) if status.state != DeploymentState::Unknown => Ok(status),
        _ => Err(RuntimeError::AppNotFound(app_id.to_string())),
    }
}

/// List the app's instances sorted ascending by id, windowed by `request`.
///
/// The reported total is the full unpaginated instance count on every page.
///
/// # Errors
///
/// `AppNotFound` when no such app is deployed; `Deployer` on port failure.
pub async fn list_instances(
    deployer: &impl AppDeployer,
    app_id: &str,
    request: PageRequest,
) -> Result<Page<InstanceStatusResource>, RuntimeError> {
    let status = deployed_status(deployer, app_id).await?;
    let page = paginate(sorted_instances(&status), request);
    Ok(page.map(|instance| to_resource(&status.deployment_id, instance)))
}

/// Look up a single instance of the app.
///
/// # Errors
///
/// `AppNotFound` when no such app is deployed, `InstanceNotFound` when the
/// app exists but has no instance with this id, `Deployer` on port failure.
pub async fn get_instance(
    deployer: &impl AppDeployer,
    app_id: &str,
    instance_id: &str,
) -> Result<InstanceStatusResource, RuntimeError> {
    let status = deployed_status(deployer, app_id).await?;
    let instance = status
        .instances
        .get(instance_id)
        .ok_or_else(|| RuntimeError::InstanceNotFound(instance_id.to_string()))?;
    Ok(to_resource(&status.deployment_id, instance))
}

/// Read a management endpoint on one live instance, returning the raw
/// textual payload unmodified.
///
/// Existence pre-checks are the deployer's responsibility; this is a pure
/// pass-through with no local validation, retry, or recovery.
///
/// # Errors
///
/// `Deployer`, wrapping whatever the port raised.
pub async fn actuator_get(
    deployer: &impl AppDeployer,
    app_id: &str,
    instance_id: &str,
    endpoint: &str,
) -> Result<String, RuntimeError> {
    Ok(deployer.actuator_get(app_id, instance_id, endpoint).await?)
}

/// Forward a management-endpoint write to one live instance.
///
/// The side effect on the instance's runtime state is outside this
/// service's visibility; success only means the deployer accepted the
/// forward.
///
/// # Errors
///
/// `Deployer`, wrapping whatever the port raised.
pub async fn actuator_post(
    deployer: &impl AppDeployer,
    app_id: &str,
    instance_id: &str,
    request: &ActuatorPostRequest,
) -> Result<(), RuntimeError> {
    Ok(deployer.actuator_post(app_id, instance_id, request).await?)
}
