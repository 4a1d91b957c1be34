//! `phaseswarm list` command handler
//!
//! Supports:
//! - Projects scoped to the current directory: `phaseswarm list`
//! - Every project in the registry: `phaseswarm list --all`
//! - JSON output: `phaseswarm list --json`

use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use phaseswarm_core::{PhaseSwarmPaths, Project, RegistryType};
use phaseswarm_registry::{resolve, select_projects, ProjectListing, RegistryStore, StatusTag};
use serde::Serialize;

use crate::cli::ListArgs;
use crate::output;

/// JSON shape of `phaseswarm list --json`
#[derive(Serialize)]
struct ListJson<'a> {
    registry: Option<&'a str>,
    registry_type: Option<RegistryType>,
    show_all: bool,
    total: usize,
    count: usize,
    projects: &'a [&'a Project],
}

pub fn run(args: ListArgs) -> Result<()> {
    let paths = PhaseSwarmPaths::detect().context("Failed to determine working directories")?;
    run_in(args, &paths)
}

/// List projects from the registry that applies to the given paths
pub fn run_in(args: ListArgs, paths: &PhaseSwarmPaths) -> Result<()> {
    if !args.json {
        println!();
        println!("{}", style("PhaseSwarm Projects").cyan().bold());
        println!("{}", style("===================").cyan());
        println!();
    }

    let Some(resolved) = resolve(paths) else {
        if args.json {
            print_json(&ListJson {
                registry: None,
                registry_type: None,
                show_all: args.all,
                total: 0,
                count: 0,
                projects: &[],
            })?;
        } else {
            output::warning("No registry found. Run \"phaseswarm init\" first.");
            println!();
        }
        return Ok(());
    };

    let registry = RegistryStore::new(&resolved.path).load()?;
    let listing = select_projects(&registry, resolved.registry_type, &paths.cwd, args.all);

    if args.json {
        let shown = listing.shown();
        return print_json(&ListJson {
            registry: Some(resolved.path.as_str()),
            registry_type: Some(resolved.registry_type),
            show_all: args.all,
            total: listing.total(),
            count: shown.len(),
            projects: shown,
        });
    }

    match &listing {
        ProjectListing::Empty => {
            output::info("No projects registered yet.");
            println!();
            println!(
                "To create a PhaseSwarm project, run {} in your assistant.",
                output::slash_command("/phaseswarm-create")
            );
        }
        ProjectListing::NoneInScope { total } => {
            output::info(&format!("No projects found for this directory: {}", paths.cwd));
            println!();
            println!(
                "{} project(s) are registered for other directories. Use `phaseswarm list --all` to show them.",
                total
            );
        }
        ProjectListing::Projects { projects, .. } => {
            for (index, project) in projects.iter().enumerate() {
                print_project(index + 1, project);
            }
        }
    }

    println!();
    println!(
        "{}",
        style(format!(
            "Registry: {} ({})",
            resolved.path, resolved.registry_type
        ))
        .cyan()
    );
    println!();
    Ok(())
}

fn print_project(number: usize, project: &Project) {
    println!(
        "{} {}",
        style(format!("{}. {}", number, project.display_name())).bold(),
        output::status_tag(&StatusTag::of(project))
    );
    println!("   Path: {}", project.path.as_deref().unwrap_or("-"));

    if let Some(raw) = project.last_accessed.as_deref() {
        let shown = match project.last_accessed_at() {
            Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => raw.to_string(),
        };
        println!("   Last accessed: {}", shown);
    }

    if let Some(prd) = project.prd_source.as_deref() {
        println!("   PRD: {}", prd);
    }

    println!();
}

fn print_json(value: &ListJson<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
