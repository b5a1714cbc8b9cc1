//! apps/v1 resources

pub mod deployment;
