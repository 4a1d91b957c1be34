//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, CommandFactory, Parser, Subcommand};
use phaseswarm_core::RegistryType;
use std::ffi::OsString;

/// PhaseSwarm - Multi-phase, multi-agent execution planning for AI coding assistants
#[derive(Parser, Debug)]
#[command(name = "phaseswarm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to run (defaults to `help`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install PhaseSwarm commands to .claude/commands/
    #[command(visible_alias = "install")]
    Init(InitArgs),

    /// List registered PhaseSwarm projects
    #[command(visible_aliases = ["ls", "projects"])]
    List(ListArgs),

    /// Show help
    Help,
}

// Init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Registry to create: local or global (skips the prompt)
    #[arg(long, value_name = "TYPE")]
    pub registry: Option<RegistryType>,

    /// Copy command templates from this directory instead of the bundled set
    #[arg(long, env = "PHASESWARM_TEMPLATES_DIR", value_name = "DIR")]
    pub templates_dir: Option<Utf8PathBuf>,
}

// List command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show projects from every directory, not only the current one
    #[arg(short, long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Lowercase the command word when it names a known command, so `INIT` runs `init`
pub fn normalize_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = Cli::command();

    let word = args
        .iter_mut()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'));
    if let Some(word) = word {
        if let Some(lower) = word.to_str().map(str::to_lowercase) {
            let known = cli
                .get_subcommands()
                .any(|sub| sub.get_name_and_visible_aliases().contains(&lower.as_str()));
            if known {
                *word = OsString::from(lower);
            }
        }
    }
    args
}
