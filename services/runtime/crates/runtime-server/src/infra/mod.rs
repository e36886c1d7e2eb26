//! Infrastructure layer — concrete implementations of application port
//! traits.
//!
//! All deployer-daemon I/O lives here. Imports from `armada_common` and
//! `crate::application::ports` are allowed; `crate::http` is forbidden.

pub mod deployer;
