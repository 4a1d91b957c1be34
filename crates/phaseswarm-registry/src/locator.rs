//! Registry location resolution
//!
//! The local registry (`<cwd>/.phaseswarm-registry.json`) takes precedence
//! over the global one (`<home>/.phaseswarm-registry.json`). Only one file is
//! ever authoritative for an invocation.

use camino::{Utf8Path, Utf8PathBuf};
use phaseswarm_core::{PhaseSwarmPaths, Registry, RegistryType};
use std::fs;

/// The registry file selected for this invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegistry {
    /// Path to the registry file
    pub path: Utf8PathBuf,

    /// Effective type: the declared `registry_type`, else the location
    pub registry_type: RegistryType,

    /// Which location the file was found at
    pub location: RegistryType,
}

/// Find the authoritative registry, or `None` when neither file exists.
///
/// Only existence is checked. The declared type comes from a best-effort
/// parse, so a corrupt file still resolves and fails later when it is read.
pub fn resolve(paths: &PhaseSwarmPaths) -> Option<ResolvedRegistry> {
    [RegistryType::Local, RegistryType::Global]
        .into_iter()
        .find_map(|location| {
            let path = paths.registry_path(location);
            if !path.is_file() {
                tracing::debug!("No {} registry at {}", location, path);
                return None;
            }

            let registry_type = declared_type(path).unwrap_or(location);
            tracing::debug!(
                "Using {} registry at {} (type: {})",
                location,
                path,
                registry_type
            );
            Some(ResolvedRegistry {
                path: path.to_owned(),
                registry_type,
                location,
            })
        })
}

/// Declared `registry_type` of a registry file, swallowing every error
pub fn declared_type(path: &Utf8Path) -> Option<RegistryType> {
    let content = fs::read_to_string(path).ok()?;
    Registry::from_json(&content).ok()?.registry_type
}
