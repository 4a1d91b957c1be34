//! `phaseswarm init` command handler

use anyhow::{Context, Result};
use phaseswarm_core::{PhaseSwarmPaths, RegistryType};
use phaseswarm_installer::{Installer, TemplateSource};
use phaseswarm_registry::{CreateOutcome, RegistryStore};

use crate::cli::InitArgs;
use crate::output;
use crate::prompt;

pub fn run(args: InitArgs) -> Result<()> {
    let paths = PhaseSwarmPaths::detect().context("Failed to determine working directories")?;
    run_in(args, &paths)
}

/// Install templates and create the registry under the given paths
pub fn run_in(args: InitArgs, paths: &PhaseSwarmPaths) -> Result<()> {
    output::banner("PhaseSwarm Initializer", "Multi-Phase Agent Orchestration");

    let source = TemplateSource::from_dir(args.templates_dir.as_deref());
    let installer = Installer::new(&paths.commands_dir, source);
    tracing::debug!("Template source: {}", installer.source());

    // Step 1: commands directory
    output::info("Creating .claude/commands directory...");
    let created = installer
        .ensure_commands_dir()
        .context("Failed to create directory")?;
    if created {
        output::success(&format!("Created {}", paths.commands_dir));
    } else {
        output::warning(&format!("Directory already exists: {}", paths.commands_dir));
    }

    // Step 2: templates
    output::info("Installing PhaseSwarm commands...");
    installer
        .install_all(|installed| {
            if installed.overwritten {
                output::warning(&format!("{} already existed, overwritten", installed.name));
            }
            output::success(&format!("Installed {}", installed.name));
        })
        .context("Failed to install PhaseSwarm commands")?;

    // Step 3: registry (a failure here is not fatal)
    let registry_type = match args.registry {
        Some(registry_type) => registry_type,
        None => {
            println!();
            prompt::ask_registry_type(paths)?
        }
    };
    let store = RegistryStore::new(paths.registry_path(registry_type));

    output::info("Checking PhaseSwarm registry...");
    match store.create_if_absent(registry_type) {
        Ok(CreateOutcome::Created) => output::success(&format!(
            "Created {} registry at {}",
            registry_type,
            store.path()
        )),
        Ok(CreateOutcome::AlreadyExists) => {
            output::warning(&format!("Registry already exists at {}", store.path()))
        }
        Err(e) => {
            tracing::debug!("Registry creation failed for {}: {}", store.path(), e);
            output::error(&format!("Failed to create registry: {}", e));
        }
    }

    // Step 4: verify
    output::info("Verifying installation...");
    let entries = installer.verify();
    for entry in &entries {
        if entry.present {
            output::success(&format!("  Found: {}", entry.path));
        } else {
            output::error(&format!("  Missing: {}", entry.path));
        }
    }
    if store.exists() {
        output::success(&format!("  Found: {}", store.path()));
    } else {
        output::warning(&format!("  Missing: {} (optional)", store.path()));
    }
    Installer::ensure_complete(&entries)?;

    print_summary(paths, registry_type, &store);
    Ok(())
}

fn print_summary(paths: &PhaseSwarmPaths, registry_type: RegistryType, store: &RegistryStore) {
    println!();
    output::success("PhaseSwarm installed successfully!");
    println!();
    println!("Usage:");
    println!();
    println!("  1. Create a PhaseSwarm from a PRD:");
    println!("     {}", output::slash_command("/phaseswarm-create"));
    println!();
    println!("  2. Run an existing PhaseSwarm:");
    println!("     {}", output::slash_command("/phaseswarm-run"));
    println!();
    output::kv("Commands installed to", paths.commands_dir.as_str());
    output::kv(
        "Registry location",
        &format!("{} ({})", store.path(), registry_type),
    );
    println!();
}
