use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// State reported by the deployer daemon for a deployment group or a single
/// instance.
///
/// `Unknown` doubles as the daemon's legacy "no such app" sentinel on the
/// wire; inside the runtime services that sentinel is collapsed into an
/// explicit not-found branch at the deployer port, so `Unknown` only reaches
/// consumers as a per-instance state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentState {
    /// Deployment has been requested and instances are still coming up.
    Deploying,
    /// All requested instances are up.
    Deployed,
    /// No instances are deployed (never deployed, or deliberately taken down).
    Undeployed,
    /// Some instances are up, some are not.
    Partial,
    /// All instances failed to deploy.
    Failed,
    /// The state could not be computed (daemon-side error).
    Error,
    /// Nothing is known about this deployment.
    Unknown,
}

impl DeploymentState {
    /// Stable display code for this state.
    ///
    /// Total by construction: every variant maps explicitly, so adding a
    /// state without a code is a compile error rather than a latent defect.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            DeploymentState::Deploying => "deploying",
            DeploymentState::Deployed => "deployed",
            DeploymentState::Undeployed => "undeployed",
            DeploymentState::Partial => "partial",
            DeploymentState::Failed => "failed",
            DeploymentState::Error => "error",
            DeploymentState::Unknown => "unknown",
        }
    }
}

/// Aggregate runtime snapshot of one logical app, as reported by the
/// deployer daemon.
///
/// Constructed fresh per query and treated as immutable for the duration of
/// one request; instances are keyed by their id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppStatus {
    /// Identifier of the deployment group owning the instances.
    pub deployment_id: String,
    /// Aggregate state across all instances.
    pub state: DeploymentState,
    /// Per-instance status, keyed by instance id.
    #[serde(default)]
    pub instances: HashMap<String, InstanceStatus>,
}

/// Status of one running (or attempted) process instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceStatus {
    /// Instance identifier, unique within its owning snapshot.
    pub id: String,
    /// Per-instance state, derived independently of the aggregate state.
    pub state: DeploymentState,
    /// Free-form metadata (host, port, pid and similar).
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// Payload forwarded to a management endpoint on one live instance.
///
/// The runtime surface inspects nothing beyond the endpoint name; the body
/// is passed through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorPostRequest {
    /// Name of the management endpoint to invoke, e.g. `loggers` or `env`.
    pub endpoint: String,
    /// Optional request body, forwarded verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

// ── Unit tests ────────────────────────────────────────────────────────────────
