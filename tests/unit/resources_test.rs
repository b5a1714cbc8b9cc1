//! Tests for resource trait implementations

use crate::common::create_mock_deployment;
use k8s_openapi::api::apps::v1::Deployment;
use kscale::resources::{DeploymentRef, KubeResource, Scalable};

#[test]
fn test_deployment_kind() {
    assert_eq!(Deployment::KIND, "Deployment");
    assert_eq!(Deployment::GROUP, "apps");
}

#[test]
fn test_deployment_name_and_namespace() {
    let deploy = create_mock_deployment("web-a", "prod", 2);
    assert_eq!(deploy.name(), "web-a");
    assert_eq!(KubeResource::namespace(&deploy), Some("prod"));
}

#[test]
fn test_deployment_without_name() {
    let deploy = Deployment::default();
    assert_eq!(deploy.name(), "<unknown>");
    assert_eq!(KubeResource::namespace(&deploy), None);
}

#[test]
fn test_desired_replicas() {
    let deploy = create_mock_deployment("web-a", "prod", 4);
    assert_eq!(deploy.desired_replicas(), Some(4));
    assert_eq!(Deployment::default().desired_replicas(), None);
}

#[test]
fn test_deployment_ref_from_resource() {
    let deploy = create_mock_deployment("web-a", "prod", 2);
    let reference = DeploymentRef::from_resource(&deploy);

    assert_eq!(reference.name, "web-a");
    assert_eq!(reference.namespace.as_deref(), Some("prod"));
    assert_eq!(reference.replicas, Some(2));
}

#[test]
fn test_deployment_ref_display() {
    assert_eq!(DeploymentRef::new("web-a", Some("prod")).to_string(), "prod/web-a");
    assert_eq!(DeploymentRef::new("web-a", None).to_string(), "web-a");
}
