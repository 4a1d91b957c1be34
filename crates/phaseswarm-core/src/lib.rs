//! # phaseswarm-core
//!
//! Core library for the PhaseSwarm CLI providing:
//! - Registry and project record types (the `.phaseswarm-registry.json` document)
//! - Path configuration for the local/global registries and the commands directory
//! - The shared error type

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::PhaseSwarmPaths;
pub use error::{Error, Result};
pub use types::{Project, Registry, RegistryType, REGISTRY_VERSION};
pub use utils::get_home_dir;
