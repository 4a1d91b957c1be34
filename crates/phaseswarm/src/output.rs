//! Terminal output utilities

use console::style;
use phaseswarm_registry::StatusTag;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a boxed banner
pub fn banner(title: &str, subtitle: &str) {
    let rule = "=".repeat(38);
    println!();
    println!("{}", style(&rule).cyan());
    println!("{}", style(format!("    {}", title)).cyan().bold());
    println!("{}", style(format!("    {}", subtitle)).cyan());
    println!("{}", style(&rule).cyan());
    println!();
}

/// Style a status tag by state
pub fn status_tag(tag: &StatusTag) -> String {
    let text = tag.to_string();
    match tag {
        StatusTag::Done => style(text).green().to_string(),
        StatusTag::Phase { .. } => style(text).yellow().to_string(),
        StatusTag::Other(_) | StatusTag::Unknown => text,
    }
}

/// Style an assistant slash command
pub fn slash_command(cmd: &str) -> String {
    style(cmd).blue().to_string()
}
