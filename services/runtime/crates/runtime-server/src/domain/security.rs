//! Request security context and audit-identity resolution.

use std::collections::HashMap;

/// Identity attached to one request by the fronting authentication layer.
///
/// Passed explicitly into [`resolve_auditor`] rather than read from ambient
/// process-wide state, so resolution stays request-scoped and testable by
/// direct argument injection.
#[derive(Debug, Clone, Default)]
pub struct SecurityContext {
    /// The authentication record, absent on requests that never passed
    /// through an authenticating layer.
    pub authentication: Option<Authentication>,
}

/// One authentication record inside a [`SecurityContext`].
#[derive(Debug, Clone, Default)]
pub struct Authentication {
    /// True for the placeholder identity given to unauthenticated requests.
    pub anonymous: bool,
    /// Display name of the principal. Absent for opaque principals such as
    /// introspected bearer tokens that carry no name claim.
    pub name: Option<String>,
    /// Free-form claims attached to the principal (introspection
    /// attributes and similar).
    pub attributes: HashMap<String, String>,
}

/// Resolve the acting user for audit attachment.
///
/// Returns `None` whenever no meaningful identity exists: auditing disabled,
/// missing context, missing authentication record, anonymous
/// authentication, or a principal whose name is absent or empty. Each step
/// short-circuits; no combination of inputs is an error.
#[must_use]
pub fn resolve_auditor(
    auditing_enabled: bool,
    context: Option<&SecurityContext>,
) -> Option<String> {
    if !auditing_enabled {
        return None;
    }
    let authentication = context?.authentication.as_ref()?;
    if authentication.anonymous {
        return None;
    }
    authentication
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

// ── Unit tests ────────────────────────────────────────────────────────────────
