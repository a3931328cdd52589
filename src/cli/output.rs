use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a secondary detail line (only meaningful with --verbose).
pub fn detail(msg: &str) {
    eprintln!("    {}", msg.dimmed());
}
