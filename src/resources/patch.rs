//! JSON patch documents for replica changes

use crate::error::Result;
use serde::Serialize;

/// JSON pointer to a workload's declared replica count
pub const REPLICAS_PATH: &str = "/spec/replicas";

/// One RFC 6902 operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOperation {
    pub op: &'static str,
    pub path: &'static str,
    pub value: u64,
}

/// Single-operation patch replacing `/spec/replicas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScalePatch {
    operations: Vec<PatchOperation>,
}

impl ScalePatch {
    pub fn replicas(replicas: u64) -> Self {
        Self {
            operations: vec![PatchOperation {
                op: "replace",
                path: REPLICAS_PATH,
                value: replicas,
            }],
        }
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.operations
    }

    /// Convert into the document type kube sends as `application/json-patch+json`
    pub fn to_json_patch(&self) -> Result<json_patch::Patch> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }
}
