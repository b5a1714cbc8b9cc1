//! Integration tests for Deployment listing and scaling
//!
//! These tests require a real Kubernetes cluster.
//! Run with: cargo test --test integration deployments_test -- --ignored

use kscale::client::{create_client, KubeBackend};
use kscale::commands::scale_deployments;
use kscale::config::kubeconfig_path;
use kscale::error::ScaleError;
use kscale::resources::DeploymentBackend;

async fn backend() -> KubeBackend {
    let path = kubeconfig_path().expect("Should resolve kubeconfig path");
    let client = create_client(&path).await.expect("Should create client");
    KubeBackend::new(client)
}

/// Test listing deployments across all namespaces with a selector nothing carries
#[tokio::test]
#[ignore]
async fn test_list_unmatched_selector_is_empty() {
    let backend = backend().await;

    let deployments = backend
        .list_deployments("kscale.test/unmatched=true")
        .await
        .expect("Should list deployments");
    assert!(deployments.is_empty());
}

/// Test listing deployments without a narrowing selector value
#[tokio::test]
#[ignore]
async fn test_list_with_existence_selector() {
    let backend = backend().await;

    let deployments = backend.list_deployments("app").await;
    assert!(deployments.is_ok(), "Should list deployments in all namespaces");
}

/// Test scaling a deployment that does not exist reports not found
#[tokio::test]
#[ignore]
async fn test_scale_missing_deployment_is_not_found() {
    let backend = backend().await;

    let err = backend
        .scale_deployment("default", "kscale-test-missing-deployment", 1)
        .await
        .expect_err("Should fail for a missing deployment");
    assert!(matches!(err, ScaleError::NotFound { .. }));
}

/// Test a full run where nothing matches only prints the completion message
#[tokio::test]
#[ignore]
async fn test_scale_run_with_no_matches() {
    let backend = backend().await;
    let mut request = crate::common::request(1, "default");
    request.selector = "kscale.test/unmatched=true".to_string();
    let mut out = Vec::<u8>::new();

    let report = scale_deployments(&backend, &request, &mut out)
        .await
        .expect("Should complete");
    assert!(report.is_success());
    assert_eq!(String::from_utf8(out).unwrap(), "Scaling Completed\n");
}
