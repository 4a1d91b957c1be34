//! Path configuration

mod paths;

pub use paths::{PhaseSwarmPaths, COMMANDS_SUBDIR, REGISTRY_FILE_NAME};
