//! Unit tests module

#[path = "../common/mod.rs"]
mod common;

mod resources_test;
