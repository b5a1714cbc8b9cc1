//! Deployment resource implementation

use crate::error::Result;
use crate::resources::{KubeResource, Listable, Scalable, ScalePatch};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{ListParams, Patch, PatchParams};
use kube::{Api, Client};

impl KubeResource for Deployment {
    const KIND: &'static str = "Deployment";
    const GROUP: &'static str = "apps";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[async_trait]
impl Listable for Deployment {
    fn api(client: Client, namespace: &str) -> Api<Self> {
        Api::namespaced(client, namespace)
    }

    fn api_all(client: Client) -> Api<Self> {
        Api::all(client)
    }

    async fn list_resources(api: &Api<Self>, label_selector: Option<&str>) -> Result<Vec<Self>> {
        let mut lp = ListParams::default();
        if let Some(ls) = label_selector {
            lp = lp.labels(ls);
        }

        let list = api.list(&lp).await?;
        Ok(list.items)
    }
}

#[async_trait]
impl Scalable for Deployment {
    fn desired_replicas(&self) -> Option<i32> {
        self.spec.as_ref().and_then(|s| s.replicas)
    }

    async fn scale(api: &Api<Self>, name: &str, replicas: u64) -> Result<()> {
        let patch = ScalePatch::replicas(replicas).to_json_patch()?;

        api.patch(name, &PatchParams::default(), &Patch::Json::<()>(patch))
            .await?;
        Ok(())
    }
}
