//! CLI definition using clap

use clap::Parser;

/// Label selector used when `-l` is not given
pub const DEFAULT_SELECTOR: &str = "release=sp-app-blue";

/// Namespace used when `-n` is not given
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Parser, Debug)]
#[command(
    name = "kscale",
    version,
    about = "Scale labelled Kubernetes deployments to a replica count",
    long_about = None,
)]
pub struct Cli {
    /// Number of replicas
    #[arg(short = 'r', long, default_value_t = 1)]
    pub replicas: u64,

    /// Label selector of the deployments to scale (key=value)
    #[arg(short = 'l', long, default_value = DEFAULT_SELECTOR)]
    pub selector: String,

    /// Namespace the scale requests are sent to
    #[arg(short = 'n', long, env = "KSCALE_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Scale each deployment in the namespace it was listed from instead of --namespace
    #[arg(long)]
    pub own_namespace: bool,

    /// Stop at the first deployment that fails to scale
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
