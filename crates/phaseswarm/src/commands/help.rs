//! Help command

use console::style;

use crate::output;

pub fn run() {
    println!();
    println!(
        "{}",
        style("PhaseSwarm - Multi-phase, multi-agent execution planning for AI coding assistants")
            .cyan()
            .bold()
    );
    println!();
    println!("Usage:");
    println!("  phaseswarm <command> [options]");
    println!();
    println!("Commands:");
    println!(
        "  {}     Install PhaseSwarm commands to .claude/commands/",
        style("init").green()
    );
    println!(
        "  {}     List PhaseSwarm projects for this directory (--all for every project)",
        style("list").green()
    );
    println!("  {}     Show this help message", style("help").green());
    println!();
    println!("After installation, use these commands in your assistant:");
    println!(
        "  {}  Create a new PhaseSwarm from a PRD",
        output::slash_command("/phaseswarm-create")
    );
    println!(
        "  {}     Execute an existing PhaseSwarm",
        output::slash_command("/phaseswarm-run")
    );
    println!();
    println!("Run `phaseswarm <command> --help` for command options.");
    println!("Learn more: https://github.com/bryhearnchi-bot/phaseswarm");
    println!();
}
