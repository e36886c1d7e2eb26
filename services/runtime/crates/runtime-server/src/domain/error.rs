//! Typed errors for the runtime instance operations.

use thiserror::Error;

/// Errors surfaced by the runtime instance operations.
///
/// `AppNotFound` and `InstanceNotFound` are client faults: they carry the
/// offending identifier, map to not-found responses at the HTTP boundary,
/// and are never retried. `Deployer` wraps any failure raised while talking
/// to the deployer daemon and propagates unchanged; its cause (network,
/// instance crash, instance-side rejection) is outside this service's
/// knowledge, so no recovery is attempted here.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("app '{0}' is not deployed")]
    AppNotFound(String),

    #[error("instance '{0}' not found")]
    InstanceNotFound(String),

    #[error(transparent)]
    Deployer(#[from] anyhow::Error),
}
