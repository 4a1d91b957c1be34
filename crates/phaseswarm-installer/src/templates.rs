//! Command template sources
//!
//! The fixed set of templates ships inside the binary. A directory source
//! can replace it, e.g. when testing edited templates before a release.

use camino::{Utf8Path, Utf8PathBuf};
use phaseswarm_core::{Error, Result};
use rust_embed::RustEmbed;
use std::fmt;
use std::fs;

/// Templates installed by `phaseswarm init`, in install order
pub const COMMAND_TEMPLATES: &[&str] = &["phaseswarm-create.md", "phaseswarm-run.md"];

/// Embedded command templates
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/commands/"]
#[prefix = ""]
struct EmbeddedCommands;

/// Where template payloads are read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    #[default]
    Embedded,
    /// Templates read from a directory at install time
    Directory(Utf8PathBuf),
}

impl TemplateSource {
    /// Directory source, or embedded when `dir` is `None`
    pub fn from_dir(dir: Option<&Utf8Path>) -> Self {
        match dir {
            Some(dir) => TemplateSource::Directory(dir.to_owned()),
            None => TemplateSource::Embedded,
        }
    }

    /// Read a template's bytes.
    ///
    /// Returns [`Error::TemplateNotFound`] when the source lacks the file.
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        match self {
            TemplateSource::Embedded => EmbeddedCommands::get(name)
                .map(|file| file.data.into_owned())
                .ok_or_else(|| Error::template_not_found(name, format!("<embedded>/{}", name))),
            TemplateSource::Directory(dir) => {
                let path = dir.join(name);
                if !path.is_file() {
                    return Err(Error::template_not_found(name, path.as_str()));
                }
                Ok(fs::read(&path)?)
            }
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Embedded => f.write_str("embedded"),
            TemplateSource::Directory(dir) => write!(f, "{}", dir),
        }
    }
}
