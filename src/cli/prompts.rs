//! Warnings and confirmations for CLI output.

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow) - suppressed in quiet mode.
pub fn warn(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red) - never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Clipboard confirmation - suppressed in quiet mode.
pub fn copied(quiet: bool) {
    if !quiet {
        println!("Copied to clipboard.");
    }
}
