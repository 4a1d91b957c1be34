//! CLI command implementations

pub mod help;
pub mod init;
pub mod list;
