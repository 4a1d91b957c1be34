//! Registry type question asked during `phaseswarm init`

use anyhow::Result;
use dialoguer::Input;
use phaseswarm_core::{PhaseSwarmPaths, RegistryType};
use std::io::{self, BufRead, IsTerminal, Write};

/// Map a free-text answer to a registry type.
///
/// `2`, `global` and `g` (any case) pick the global registry; anything else,
/// including an empty answer, picks the local default.
pub fn parse_registry_choice(input: &str) -> RegistryType {
    match input.trim().to_ascii_lowercase().as_str() {
        "2" | "global" | "g" => RegistryType::Global,
        _ => RegistryType::Local,
    }
}

/// Ask once which registry to use. Never re-prompts.
pub fn ask_registry_type(paths: &PhaseSwarmPaths) -> Result<RegistryType> {
    println!("Where should PhaseSwarm track projects?");
    println!("  1) Local  - {} (default)", paths.local_registry);
    println!("  2) Global - {}", paths.global_registry);
    println!();

    let stdin = io::stdin();
    let answer = if stdin.is_terminal() {
        Input::<String>::new()
            .with_prompt("Registry")
            .default("1".to_string())
            .allow_empty(true)
            .interact_text()?
    } else {
        print!("Registry [1]: ");
        io::stdout().flush()?;
        let answer = read_answer(&mut stdin.lock())?;
        println!();
        answer
    };

    let choice = parse_registry_choice(&answer);
    tracing::debug!("Registry answer {:?} -> {}", answer.trim(), choice);
    Ok(choice)
}

/// Read one line; end of input counts as an empty answer
fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}
