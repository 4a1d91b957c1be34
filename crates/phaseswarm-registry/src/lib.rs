//! # phaseswarm-registry
//!
//! Registry handling for the PhaseSwarm CLI:
//! - Resolving which registry file (local or global) is authoritative
//! - Reading, writing and creating the registry document
//! - Selecting, scoping and ordering projects for display
//!
//! # Example
//!
//! ```no_run
//! use phaseswarm_core::PhaseSwarmPaths;
//! use phaseswarm_registry::{resolve, select_projects, RegistryStore};
//!
//! # fn example() -> phaseswarm_core::Result<()> {
//! let paths = PhaseSwarmPaths::detect()?;
//! if let Some(resolved) = resolve(&paths) {
//!     let registry = RegistryStore::new(&resolved.path).load()?;
//!     let listing = select_projects(&registry, resolved.registry_type, &paths.cwd, false);
//!     println!("{} project(s) shown", listing.shown().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod locator;
pub mod query;
pub mod store;

pub use locator::{resolve, ResolvedRegistry};
pub use query::{
    filter_projects, is_within_root, select_projects, sort_by_last_accessed, ProjectListing,
    StatusTag,
};
pub use store::{CreateOutcome, RegistryStore};
