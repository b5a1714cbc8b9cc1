//! Run configuration for kscale

use crate::cli::Cli;
use crate::error::{Result, ScaleError};
use crate::resources::DeploymentRef;
use std::path::{Path, PathBuf};

/// Which namespace a scale request is sent to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamespaceMode {
    /// Always the namespace given on the command line, whatever namespace
    /// the deployment was listed from
    #[default]
    Fixed,
    /// The namespace the deployment was listed from
    Own,
}

/// Everything a single scaling run needs, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleRequest {
    pub replicas: u64,
    pub selector: String,
    pub namespace: String,
    pub namespace_mode: NamespaceMode,
    pub strict: bool,
}

impl ScaleRequest {
    /// Namespace the patch for `deployment` is sent to
    pub fn target_namespace<'a>(&'a self, deployment: &'a DeploymentRef) -> &'a str {
        match self.namespace_mode {
            NamespaceMode::Fixed => &self.namespace,
            NamespaceMode::Own => deployment.namespace.as_deref().unwrap_or(&self.namespace),
        }
    }
}

impl From<&Cli> for ScaleRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            replicas: cli.replicas,
            selector: cli.selector.clone(),
            namespace: cli.namespace.clone(),
            namespace_mode: if cli.own_namespace {
                NamespaceMode::Own
            } else {
                NamespaceMode::Fixed
            },
            strict: cli.strict,
        }
    }
}

/// Get the home directory, preferring $HOME
pub fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or(ScaleError::NoHomeDir)
}

/// Get the kubeconfig path (~/.kube/config)
pub fn kubeconfig_path() -> Result<PathBuf> {
    home_dir().map(|h| kubeconfig_path_in(&h))
}

/// Kubeconfig path under a given home directory
pub fn kubeconfig_path_in(home: &Path) -> PathBuf {
    home.join(".kube").join("config")
}
