//! Type definitions for the PhaseSwarm registry

mod lenient;
pub mod registry_types;

pub use registry_types::*;
