//! Core traits for scalable Kubernetes resources

use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client, Resource};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{self, Debug};

/// Core trait that all handled Kubernetes resources implement
pub trait KubeResource:
    Clone + Debug + DeserializeOwned + Serialize + Send + Sync + Resource + 'static
{
    /// The Kubernetes API kind (e.g., "Deployment")
    const KIND: &'static str;

    /// The API group (e.g., "apps")
    const GROUP: &'static str;

    /// Get object metadata
    fn metadata(&self) -> &ObjectMeta;

    /// Get the resource name
    fn name(&self) -> &str {
        self.metadata()
            .name
            .as_deref()
            .unwrap_or("<unknown>")
    }

    /// Get the resource namespace (if namespaced)
    fn namespace(&self) -> Option<&str> {
        self.metadata().namespace.as_deref()
    }
}

/// Trait for resources that can be listed
#[async_trait]
pub trait Listable: KubeResource {
    /// Create a kube Api handle scoped to one namespace
    fn api(client: Client, namespace: &str) -> Api<Self>
    where
        Self: Sized;

    /// Create an Api for all namespaces
    fn api_all(client: Client) -> Api<Self>
    where
        Self: Sized;

    /// List resources with optional label selector
    async fn list_resources(api: &Api<Self>, label_selector: Option<&str>) -> Result<Vec<Self>>
    where
        Self: Sized;
}

/// Trait for resources that can be scaled
#[async_trait]
pub trait Scalable: KubeResource {
    /// Get desired replica count
    fn desired_replicas(&self) -> Option<i32>;

    /// Scale to specified replica count
    async fn scale(api: &Api<Self>, name: &str, replicas: u64) -> Result<()>
    where
        Self: Sized;
}

/// Identity of a listed deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRef {
    pub name: String,
    /// Namespace the API listed the deployment in
    pub namespace: Option<String>,
    /// Replica count declared in the spec at listing time
    pub replicas: Option<i32>,
}

impl DeploymentRef {
    pub fn new(name: impl Into<String>, namespace: Option<&str>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.map(String::from),
            replicas: None,
        }
    }

    pub fn from_resource<T: Scalable>(resource: &T) -> Self {
        Self {
            name: resource.name().to_string(),
            namespace: resource.namespace().map(String::from),
            replicas: resource.desired_replicas(),
        }
    }
}

impl fmt::Display for DeploymentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// The cluster operations a scaling run is made of
#[async_trait]
pub trait DeploymentBackend: Send + Sync {
    /// List deployments in all namespaces matching a label selector, in API order
    async fn list_deployments(&self, selector: &str) -> Result<Vec<DeploymentRef>>;

    /// Set the declared replica count of one deployment
    async fn scale_deployment(&self, namespace: &str, name: &str, replicas: u64) -> Result<()>;
}
