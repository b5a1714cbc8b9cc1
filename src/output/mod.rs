//! Output formatting for kscale

use crate::commands::ScaleFailure;
use owo_colors::{OwoColorize, Stream};

/// Printed once the loop over matched deployments has finished
pub const COMPLETION_MESSAGE: &str = "Scaling Completed";

/// Progress line for the `index`-th (1-based) deployment
pub fn progress_line(index: usize, name: &str, replicas: u64) -> String {
    format!("Deployment {}: {} is scaled to {} replicas", index, name, replicas)
}

/// Format every failed deployment for the error summary
pub fn format_failures(failures: &[ScaleFailure], processed: usize) -> String {
    let mut output = format!(
        "{} {} of {} deployments failed to scale:",
        "Failed:".if_supports_color(Stream::Stderr, |t| t.red()),
        failures.len(),
        processed
    );

    for failure in failures {
        output.push_str(&format!(
            "\n  {} (patched in {}): {}",
            failure.deployment.name.if_supports_color(Stream::Stderr, |t| t.bold()),
            failure.target_namespace,
            failure.error
        ));
    }

    output
}
