#![cfg_attr(test, allow(clippy::expect_used))]

pub mod deployment;

pub use deployment::{ActuatorPostRequest, AppStatus, DeploymentState, InstanceStatus};
