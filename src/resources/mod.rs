//! Kubernetes resource types and traits

pub mod apps;
pub mod patch;
pub mod traits;

pub use patch::{PatchOperation, ScalePatch};
pub use traits::*;
