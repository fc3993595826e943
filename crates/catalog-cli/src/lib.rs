//! CLI library components for the catalog verifier.

pub mod logging;
pub mod types;
pub mod verify;
