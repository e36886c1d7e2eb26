//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `armada_common` — never from `crate::infra`
//! or `crate::http`.

use anyhow::Result;
use armada_common::{ActuatorPostRequest, AppStatus};
use async_trait::async_trait;

/// Deployer-daemon operations consumed by the runtime surface.
///
/// Implementations are treated as potentially blocking, synchronous-looking
/// I/O: no timeout or retry is imposed at this boundary, and any failure
/// they raise propagates to the caller unchanged.
#[async_trait]
pub trait AppDeployer: Send + Sync {
    /// Fetch the aggregate status snapshot for `app_id`.
    ///
    /// Returns `Ok(None)` when no such app is deployed. The daemon's legacy
    /// unknown-state sentinel is collapsed into `None` by implementations,
    /// so "not found" is an explicit branch here rather than a magic value.
    async fn app_status(&self, app_id: &str) -> Result<Option<AppStatus>>;

    /// Read `endpoint` from the management surface of one live instance,
    /// returning the raw textual payload.
    async fn actuator_get(
        &self,
        app_id: &str,
        instance_id: &str,
        endpoint: &str,
    ) -> Result<String>;

    /// Forward a management-endpoint write to one live instance. May fail
    /// if the instance is unreachable or rejects the operation.
    async fn actuator_post(
        &self,
        app_id: &str,
        instance_id: &str,
        request: &ActuatorPostRequest,
    ) -> Result<()>;
}
