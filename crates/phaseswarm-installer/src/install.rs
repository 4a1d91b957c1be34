//! Template installation into `<cwd>/.claude/commands`

use crate::templates::{TemplateSource, COMMAND_TEMPLATES};
use camino::{Utf8Path, Utf8PathBuf};
use phaseswarm_core::{Error, Result};
use std::fs;

/// One template written by [`Installer::install_template`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledTemplate {
    pub name: String,
    pub path: Utf8PathBuf,
    /// An existing file was replaced
    pub overwritten: bool,
}

/// Presence of one expected file after installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyEntry {
    pub path: Utf8PathBuf,
    pub present: bool,
}

/// Copies the command templates into a commands directory
#[derive(Debug, Clone)]
pub struct Installer {
    commands_dir: Utf8PathBuf,
    source: TemplateSource,
    templates: Vec<String>,
}

impl Installer {
    /// Installer for the standard template set
    pub fn new(commands_dir: impl AsRef<Utf8Path>, source: TemplateSource) -> Self {
        Self {
            commands_dir: commands_dir.as_ref().to_owned(),
            source,
            templates: COMMAND_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn commands_dir(&self) -> &Utf8Path {
        &self.commands_dir
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Create the commands directory.
    ///
    /// Returns false when it already existed.
    pub fn ensure_commands_dir(&self) -> Result<bool> {
        if self.commands_dir.is_dir() {
            tracing::debug!("Commands directory exists: {}", self.commands_dir);
            return Ok(false);
        }
        fs::create_dir_all(&self.commands_dir)?;
        tracing::debug!("Created commands directory: {}", self.commands_dir);
        Ok(true)
    }

    /// Copy one template byte-for-byte, overwriting any existing file
    pub fn install_template(&self, name: &str) -> Result<InstalledTemplate> {
        let data = self.source.read(name)?;
        let path = self.commands_dir.join(name);
        let overwritten = path.exists();

        fs::write(&path, &data)?;
        tracing::debug!(
            "Installed {} ({} bytes, source: {}) to {}",
            name,
            data.len(),
            self.source,
            path
        );

        Ok(InstalledTemplate {
            name: name.to_string(),
            path,
            overwritten,
        })
    }

    /// Create the directory and install every template, stopping at the first failure.
    ///
    /// `on_installed` runs after each template is written.
    pub fn install_all<F>(&self, mut on_installed: F) -> Result<Vec<InstalledTemplate>>
    where
        F: FnMut(&InstalledTemplate),
    {
        self.ensure_commands_dir()?;
        let mut installed = Vec::with_capacity(self.templates.len());
        for name in &self.templates {
            let item = self.install_template(name)?;
            on_installed(&item);
            installed.push(item);
        }
        Ok(installed)
    }

    /// Check that every template is present in the commands directory
    pub fn verify(&self) -> Vec<VerifyEntry> {
        self.templates
            .iter()
            .map(|name| {
                let path = self.commands_dir.join(name);
                let present = path.is_file();
                VerifyEntry { path, present }
            })
            .collect()
    }

    /// Fail with [`Error::InstallIncomplete`] when verification finds gaps
    pub fn ensure_complete(entries: &[VerifyEntry]) -> Result<()> {
        let missing: Vec<String> = entries
            .iter()
            .filter(|e| !e.present)
            .map(|e| e.path.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::install_incomplete(missing))
        }
    }
}
