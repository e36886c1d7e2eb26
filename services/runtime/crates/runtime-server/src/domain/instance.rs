//! Instance status ordering and presentation projection.

use std::collections::HashMap;

use armada_common::{AppStatus, InstanceStatus};
use serde::Serialize;

/// Read-only presentation record for one instance.
///
/// Built per request from an [`InstanceStatus`] and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceStatusResource {
    /// Instance identifier.
    pub instance_id: String,
    /// Display code of the instance's deployment state.
    pub state: String,
    /// Free-form instance metadata, passed through unmodified.
    pub attributes: HashMap<String, String>,
    /// Self link scoped under the owning deployment:
    /// `{deployment_id}/{instance_id}`.
    pub href: String,
}

/// Project one instance into its resource, linked under the owning
/// deployment.
#[must_use]
pub fn to_resource(deployment_id: &str, instance: &InstanceStatus) -> InstanceStatusResource {
    InstanceStatusResource {
        instance_id: instance.id.clone(),
        state: instance.state.code().to_string(),
        attributes: instance.attributes.clone(),
        href: format!("{deployment_id}/{}", instance.id),
    }
}

/// Collect a snapshot's instances sorted ascending by id.
///
/// Lexicographic, total, and deterministic regardless of the map's
/// iteration order.
#[must_use]
pub fn sorted_instances(status: &AppStatus) -> Vec<&InstanceStatus> {
    let mut instances: Vec<&InstanceStatus> = status.instances.values().collect();
    instances.sort_by(|a, b| a.id.cmp(&b.id));
    instances
}

// ── Unit tests ────────────────────────────────────────────────────────────────
