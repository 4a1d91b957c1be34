//! # phaseswarm-installer
//!
//! Installs the PhaseSwarm command templates into a project's
//! `.claude/commands/` directory:
//! - Template sources (compiled into the binary, or an on-disk directory)
//! - Directory creation and byte-for-byte copying
//! - Post-install verification

pub mod install;
pub mod templates;

pub use install::{InstalledTemplate, Installer, VerifyEntry};
pub use templates::{TemplateSource, COMMAND_TEMPLATES};
