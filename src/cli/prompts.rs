//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;

use super::quiet;
use classpass::terminal::format_number;

/// Yellow warning on stderr, suppressed in quiet mode
pub fn warn(msg: &str) {
    log::warn!("{msg}");
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Red error on stderr, always shown
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** {} password(s) COPIED TO CLIPBOARD ***", format_number(count));
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &Path) {
    if !quiet::enabled() {
        let full_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        eprintln!(
            "{} password(s) \u{2192} {}",
            format_number(count),
            full_path.display()
        );
    }
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("{}", "Defaults saved.".green());
    }
}
