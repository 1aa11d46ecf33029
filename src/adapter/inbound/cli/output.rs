//! CLI output formatting.
//!
//! Small set of helpers for the non-report lines the CLI prints: section
//! headers, labeled fields, status lines. Styling is switched off globally
//! when color is disabled.

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit ANSI styling.
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Resolve `--color` against whether stdout is a terminal.
    #[must_use]
    pub fn from_choice(choice: &ColorChoice) -> Self {
        let color = match choice {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self::new(color)
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
///
/// Call this early in the CLI entry point.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether styled output is enabled.
#[must_use]
pub fn is_color() -> bool {
    read_config().color
}

/// Print a section header.
pub fn section(title: &str) {
    println!();
    if is_color() {
        println!("{}", title.bold());
    } else {
        println!("{title}");
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if is_color() {
        println!("  {:<16} {}", label.dimmed(), value);
    } else {
        println!("  {label:<16} {value}");
    }
}

/// Print a success line.
pub fn success(message: &str) {
    if is_color() {
        println!("  {} {}", "✓".green(), message);
    } else {
        println!("  ✓ {message}");
    }
}

/// Print a note/hint.
pub fn note(message: &str) {
    if is_color() {
        println!("  {}", message.dimmed());
    } else {
        println!("  {message}");
    }
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_color() {
        eprintln!("  {} {}", "×".red(), message);
    } else {
        eprintln!("  × {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choices_ignore_terminal() {
        assert!(OutputConfig::from_choice(&ColorChoice::Always).color);
        assert!(!OutputConfig::from_choice(&ColorChoice::Never).color);
    }
}
