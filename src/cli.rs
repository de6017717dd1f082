// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help() {
    println!(
        "Nudge v{} - A tiny terminal to-do list that nags you before deadlines (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    nudge [--root <path>]");
    println!("    nudge --help");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -V, --version         Print the version and exit.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("KEYBINDINGS:");
    println!("    a                 Add a task (title + deadline form)");
    println!("    d / Del           Delete the selected task");
    println!("    Space / g         Grab the selected task to move it");
    println!("    j/k, arrows       Move around (or move a grabbed task)");
    println!("    Enter             Drop a grabbed task at its new position");
    println!("    t                 Toggle light/dark theme");
    println!("    ?                 Toggle the full help panel");
    println!("    q                 Quit");
    println!();
    println!("DEADLINES:");
    println!("    Entered as local time: 2026-03-14 16:30 or 2026-03-14T16:30.");
    println!(
        "    A deadline less than {} minutes away pops a reminder toast (and a",
        crate::reminder::DUE_SOON_WINDOW_MINS
    );
    println!("    desktop notification) on every scan until it passes. Text that");
    println!("    does not parse is kept as-is and simply never comes due.");
    println!();
    println!("CONFIG:");
    println!("    Theme and notification settings persist in config.toml under the");
    println!("    platform config directory (or <root>/config with --root).");
    println!("    Tasks live in memory only and reset on restart.");
}

pub fn print_version() {
    println!("nudge {}", env!("CARGO_PKG_VERSION"));
}
