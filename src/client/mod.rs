//! Kubernetes client construction and the cluster-backed deployment backend

use crate::error::{Result, ScaleError};
use crate::resources::{DeploymentBackend, DeploymentRef, Listable, Scalable};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;
use tracing::debug;

/// Create a Kubernetes client from a kubeconfig file, using its current context
pub async fn create_client(kubeconfig: &Path) -> Result<Client> {
    let config = load_config(kubeconfig).await?;
    Client::try_from(config).map_err(ScaleError::from)
}

/// Load Kubernetes configuration
async fn load_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "Loading kubeconfig");

    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        ScaleError::Config(format!(
            "Failed to read kubeconfig {}: {e}",
            path.display()
        ))
    })?;

    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| ScaleError::Config(format!("Failed to load kubeconfig: {e}")))
}

/// Deployment backend talking to a live API server
#[derive(Clone)]
pub struct KubeBackend {
    client: Client,
}

impl KubeBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeploymentBackend for KubeBackend {
    async fn list_deployments(&self, selector: &str) -> Result<Vec<DeploymentRef>> {
        let api = Deployment::api_all(self.client.clone());
        let deployments = Deployment::list_resources(&api, Some(selector)).await?;
        debug!(count = deployments.len(), selector, "Listed deployments");

        Ok(deployments.iter().map(DeploymentRef::from_resource).collect())
    }

    async fn scale_deployment(&self, namespace: &str, name: &str, replicas: u64) -> Result<()> {
        let api = Deployment::api(self.client.clone(), namespace);
        match Deployment::scale(&api, name, replicas).await {
            Err(ScaleError::Kube(kube::Error::Api(e))) if e.code == 404 => Err(ScaleError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
            other => other,
        }
    }
}
