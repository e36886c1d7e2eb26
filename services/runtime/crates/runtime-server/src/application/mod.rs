//! Application layer — port trait definitions and use-case services.
//!
//! This module depends only on `crate::domain` and `armada_common` — never
//! on `crate::infra` or `crate::http`.

pub mod ports;
pub mod services;

pub use ports::AppDeployer;
