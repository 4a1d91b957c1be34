//! Registry persistence
//!
//! Writes are plain overwrites; concurrent writers are last-writer-wins.

use camino::{Utf8Path, Utf8PathBuf};
use phaseswarm_core::{Error, Registry, RegistryType, Result, REGISTRY_VERSION};
use std::fs;

/// Result of [`RegistryStore::create_if_absent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new empty registry was written
    Created,
    /// A file was already present and left untouched
    AlreadyExists,
}

/// Reads and writes one registry file
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: Utf8PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the registry.
    ///
    /// Returns [`Error::CorruptRegistry`] when the file is not a JSON object.
    pub fn load(&self) -> Result<Registry> {
        let content = fs::read_to_string(&self.path)?;
        let registry = Registry::from_json(&content)
            .map_err(|e| Error::corrupt_registry(self.path.as_str(), e.to_string()))?;

        if registry.is_newer_schema() {
            tracing::warn!(
                "Registry {} declares version {:?}, newer than supported version {}; reading best-effort",
                self.path,
                registry.registry_version,
                REGISTRY_VERSION
            );
        }
        tracing::debug!(
            "Loaded {} project(s) from {}",
            registry.projects.len(),
            self.path
        );
        Ok(registry)
    }

    /// Write the registry as pretty JSON, creating the parent directory
    pub fn save(&self, registry: &Registry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, registry.to_json_pretty()?)?;
        tracing::debug!("Wrote registry {}", self.path);
        Ok(())
    }

    /// Create an empty registry of the given type unless a file already exists
    pub fn create_if_absent(&self, registry_type: RegistryType) -> Result<CreateOutcome> {
        if self.exists() {
            return Ok(CreateOutcome::AlreadyExists);
        }
        self.save(&Registry::new(registry_type))?;
        Ok(CreateOutcome::Created)
    }
}
