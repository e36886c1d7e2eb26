//! Unit tests for the instance status service.

#![allow(clippy::expect_used)]

use armada_common::{ActuatorPostRequest, DeploymentState};
use armada_runtime_server::application::services::instance_status;
use armada_runtime_server::domain::page::PageRequest;
use armada_runtime_server::domain::RuntimeError;

use crate::mocks::{
    DeployerActuator, DeployerAppMissing, DeployerUnknownSentinel, DeployerUnreachableInstance,
    DeployerWithInstances, instance, snapshot,
};

// ── Not-found semantics ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_instances_missing_app_fails_app_not_found() {
    let err = instance_status::list_instances(&DeployerAppMissing, "ghost", PageRequest::default())
        .await
        .expect_err("missing app must fail");
    assert!(matches!(err, RuntimeError::AppNotFound(id) if id == "ghost"));
}

#[tokio::test]
async fn test_get_instance_missing_app_fails_app_not_found() {
    let err = instance_status::get_instance(&DeployerAppMissing, "ghost", "ghost-0")
        .await
        .expect_err("missing app must fail");
    assert!(matches!(err, RuntimeError::AppNotFound(id) if id == "ghost"));
}

#[tokio::test]
async fn test_leaked_unknown_sentinel_still_fails_app_not_found() {
    let err =
        instance_status::list_instances(&DeployerUnknownSentinel, "ghost", PageRequest::default())
            .await
            .expect_err("sentinel snapshot must fail");
    assert!(matches!(err, RuntimeError::AppNotFound(_)));
}

#[tokio::test]
async fn test_get_instance_absent_id_fails_instance_not_found() {
    // The app exists and has other instances; only the requested id is gone.
    let deployer = DeployerWithInstances {
        status: snapshot("ticker.log-sink", &["ticker-0", "ticker-1"]),
    };
    let err = instance_status::get_instance(&deployer, "ticker", "ticker-9")
        .await
        .expect_err("absent instance must fail");
    assert!(matches!(err, RuntimeError::InstanceNotFound(id) if id == "ticker-9"));
}

// ── Ordering and pagination ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_instances_sorts_by_id_regardless_of_map_order() {
    let deployer = DeployerWithInstances {
        status: snapshot("ticker.log-sink", &["b-1", "a-0"]),
    };
    let page = instance_status::list_instances(&deployer, "ticker", PageRequest::default())
        .await
        .expect("list");
    let ids: Vec<&str> = page.items.iter().map(|r| r.instance_id.as_str()).collect();
    assert_eq!(ids, vec!["a-0", "b-1"]);
}

#[tokio::test]
async fn test_list_instances_windows_pages_and_reports_full_total() {
    let deployer = DeployerWithInstances {
        status: snapshot("ticker.log-sink", &["i0", "i1", "i2", "i3", "i4"]),
    };

    let expectations: [(usize, Vec<&str>); 4] = [
        (0, vec!["i0", "i1"]),
        (1, vec!["i2", "i3"]),
        (2, vec!["i4"]),
        (3, vec![]),
    ];
    for (page_number, expected) in expectations {
        let page =
            instance_status::list_instances(&deployer, "ticker", PageRequest::new(page_number, 2))
                .await
                .expect("list");
        let ids: Vec<&str> = page.items.iter().map(|r| r.instance_id.as_str()).collect();
        assert_eq!(ids, expected, "page {page_number}");
        assert_eq!(page.total, 5, "total is the full set size on every page");
    }
}

// ── Resource projection ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_instance_projects_state_attributes_and_link() {
    let mut status = snapshot("ticker.log-sink", &[]);
    let mut failed = instance("ticker-2", DeploymentState::Failed);
    failed
        .attributes
        .insert("pid".to_string(), "4711".to_string());
    status.instances.insert("ticker-2".to_string(), failed);

    let deployer = DeployerWithInstances { status };
    let resource = instance_status::get_instance(&deployer, "ticker", "ticker-2")
        .await
        .expect("get instance");
    assert_eq!(resource.instance_id, "ticker-2");
    assert_eq!(resource.state, "failed");
    assert_eq!(resource.href, "ticker.log-sink/ticker-2");
    assert_eq!(resource.attributes.get("pid").map(String::as_str), Some("4711"));
}

// ── Actuator proxying ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_actuator_get_returns_raw_payload_unmodified() {
    let body = instance_status::actuator_get(
        &DeployerActuator::default(),
        "ticker",
        "ticker-0",
        "health",
    )
    .await
    .expect("actuator read");
    assert_eq!(body, "{\"endpoint\":\"health\",\"status\":\"UP\"}");
}

#[tokio::test]
async fn test_actuator_post_forwards_target_and_request() {
    let deployer = DeployerActuator::default();
    let request = ActuatorPostRequest {
        endpoint: "loggers".to_string(),
        body: Some(serde_json::json!({"configuredLevel": "DEBUG"})),
    };
    instance_status::actuator_post(&deployer, "ticker", "ticker-0", &request)
        .await
        .expect("actuator write");

    let writes = deployer.writes.lock().expect("writes lock");
    assert_eq!(writes.len(), 1);
    let (app_id, instance_id, forwarded) = &writes[0];
    assert_eq!(app_id, "ticker");
    assert_eq!(instance_id, "ticker-0");
    assert_eq!(forwarded.endpoint, "loggers");
    assert_eq!(
        forwarded.body,
        Some(serde_json::json!({"configuredLevel": "DEBUG"}))
    );
}

#[tokio::test]
async fn test_actuator_failures_propagate_as_deployer_errors() {
    let err = instance_status::actuator_get(
        &DeployerUnreachableInstance,
        "ticker",
        "ticker-0",
        "health",
    )
    .await
    .expect_err("unreachable instance must fail");
    assert!(matches!(err, RuntimeError::Deployer(_)));
    assert!(err.to_string().contains("ticker-0"));

    let err = instance_status::actuator_post(
        &DeployerUnreachableInstance,
        "ticker",
        "ticker-0",
        &ActuatorPostRequest {
            endpoint: "restart".to_string(),
            body: None,
        },
    )
    .await
    .expect_err("unreachable instance must fail");
    assert!(matches!(err, RuntimeError::Deployer(_)));
}
