//! kscale - scale labelled Kubernetes deployments to a replica count

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod resources;
