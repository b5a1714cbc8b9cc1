//! Command implementations

pub mod scale;

pub use scale::*;
