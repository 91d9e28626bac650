//! Supporting helpers for stderr prefixes.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

fn stderr_color() -> bool {
    std::io::stderr().is_terminal()
}

/// `error:` prefix, red when stderr is a terminal.
pub fn error_prefix() -> String {
    if stderr_color() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}
