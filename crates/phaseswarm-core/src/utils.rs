//! Shared utility functions for PhaseSwarm crates

use crate::error::{Error, Result};
use camino::Utf8PathBuf;
use std::path::PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that a
/// relocated HOME (containers, tests) is respected.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    let home = match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home),
        _ => dirs::home_dir().ok_or(Error::HomeDirNotFound)?,
    };
    to_utf8(home)
}

/// Convert a std path into a UTF-8 path
pub fn to_utf8(path: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).map_err(|p| Error::NonUtf8Path {
        path: p.to_string_lossy().into_owned(),
    })
}
