//! Terminal output for the CLI.
//!
//! Human-readable lines go to stdout with colored symbols; errors go to
//! stderr. Quiet mode suppresses everything but warnings and errors.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Apply output settings from the command-line flags.
pub fn configure(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a section header.
pub fn section(title: &str) {
    if is_quiet() {
        return;
    }
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if is_quiet() {
        return;
    }
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    eprintln!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}
