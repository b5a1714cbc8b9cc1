//! Scale command implementation

use crate::client::{create_client, KubeBackend};
use crate::config::{kubeconfig_path, NamespaceMode, ScaleRequest};
use crate::error::{Result, ScaleError};
use crate::output;
use crate::resources::{DeploymentBackend, DeploymentRef};
use std::io::Write;
use tracing::{info, warn};

/// A deployment whose scale request failed
#[derive(Debug)]
pub struct ScaleFailure {
    pub deployment: DeploymentRef,
    /// Namespace the patch was sent to
    pub target_namespace: String,
    pub error: ScaleError,
}

/// Outcome of a scaling run
#[derive(Debug, Default)]
pub struct ScaleReport {
    /// Deployments a scale request was sent for
    pub processed: usize,
    pub failures: Vec<ScaleFailure>,
    /// Set when --strict stopped the run before every deployment was processed
    pub aborted: bool,
}

impl ScaleReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the scale command against the cluster in ~/.kube/config
pub async fn run_scale(request: &ScaleRequest) -> Result<()> {
    let path = kubeconfig_path()?;
    let client = create_client(&path).await?;
    let backend = KubeBackend::new(client);

    let report = scale_deployments(&backend, request, &mut std::io::stdout()).await?;
    if report.is_success() {
        return Ok(());
    }

    eprintln!("{}", output::format_failures(&report.failures, report.processed));
    Err(ScaleError::BatchFailed {
        failed: report.failures.len(),
        processed: report.processed,
    })
}

/// Scale every deployment matching the request's selector, writing progress to `out`.
///
/// Listing errors abort before anything is scaled. A failed patch is recorded
/// and the loop moves on, unless the request is strict. The completion
/// message is written whenever the loop ends.
pub async fn scale_deployments<B, W>(
    backend: &B,
    request: &ScaleRequest,
    out: &mut W,
) -> Result<ScaleReport>
where
    B: DeploymentBackend + ?Sized,
    W: Write,
{
    let deployments = backend.list_deployments(&request.selector).await?;
    info!(
        count = deployments.len(),
        selector = %request.selector,
        "Matched deployments"
    );

    let mut report = ScaleReport::default();

    for (i, deployment) in deployments.iter().enumerate() {
        writeln!(
            out,
            "{}",
            output::progress_line(i + 1, &deployment.name, request.replicas)
        )?;

        let namespace = request.target_namespace(deployment);
        if request.namespace_mode == NamespaceMode::Fixed {
            if let Some(listed) = deployment.namespace.as_deref().filter(|ns| *ns != namespace) {
                warn!(
                    deployment = %deployment.name,
                    listed_namespace = listed,
                    target_namespace = namespace,
                    "Deployment lives outside the target namespace (see --own-namespace)"
                );
            }
        }
        if deployment.replicas.and_then(|r| u64::try_from(r).ok()) == Some(request.replicas) {
            info!(deployment = %deployment, "Already at desired replica count");
        }

        report.processed += 1;
        if let Err(error) = backend
            .scale_deployment(namespace, &deployment.name, request.replicas)
            .await
        {
            warn!(deployment = %deployment, namespace, %error, "Failed to scale deployment");
            report.failures.push(ScaleFailure {
                deployment: deployment.clone(),
                target_namespace: namespace.to_string(),
                error,
            });

            if request.strict {
                report.aborted = true;
                break;
            }
        }
    }

    writeln!(out, "{}", output::COMPLETION_MESSAGE)?;
    Ok(report)
}
