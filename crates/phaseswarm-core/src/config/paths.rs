//! Filesystem locations used by a single PhaseSwarm invocation
//!
//! Every location is derived from two inputs, the working directory and the
//! home directory, so commands can be pointed at temporary directories.

use crate::error::Result;
use crate::types::RegistryType;
use crate::utils::{get_home_dir, to_utf8};
use camino::{Utf8Path, Utf8PathBuf};

/// Registry file name, shared by the local and global registries
pub const REGISTRY_FILE_NAME: &str = ".phaseswarm-registry.json";

/// Commands directory relative to the working directory
pub const COMMANDS_SUBDIR: &str = ".claude/commands";

/// Resolved paths for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSwarmPaths {
    /// Directory the CLI was invoked from
    pub cwd: Utf8PathBuf,

    /// User home directory
    pub home: Utf8PathBuf,

    /// Where command templates are installed (`<cwd>/.claude/commands`)
    pub commands_dir: Utf8PathBuf,

    /// `<cwd>/.phaseswarm-registry.json`
    pub local_registry: Utf8PathBuf,

    /// `<home>/.phaseswarm-registry.json`
    pub global_registry: Utf8PathBuf,
}

impl PhaseSwarmPaths {
    /// Build paths from an explicit working and home directory
    pub fn new(cwd: impl Into<Utf8PathBuf>, home: impl Into<Utf8PathBuf>) -> Self {
        let cwd = cwd.into();
        let home = home.into();
        Self {
            commands_dir: cwd.join(COMMANDS_SUBDIR),
            local_registry: cwd.join(REGISTRY_FILE_NAME),
            global_registry: home.join(REGISTRY_FILE_NAME),
            cwd,
            home,
        }
    }

    /// Build paths from the process working directory and home directory
    pub fn detect() -> Result<Self> {
        let cwd = to_utf8(std::env::current_dir()?)?;
        let home = get_home_dir()?;
        tracing::debug!("Detected cwd={} home={}", cwd, home);
        Ok(Self::new(cwd, home))
    }

    /// Registry file for the given registry type
    pub fn registry_path(&self, registry_type: RegistryType) -> &Utf8Path {
        match registry_type {
            RegistryType::Local => &self.local_registry,
            RegistryType::Global => &self.global_registry,
        }
    }
}
