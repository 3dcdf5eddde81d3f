//! Interactive shell engine for foliosh.
//!
//! This module provides the interactive surface:
//! - Line editing with rustyline
//! - Ghost-text completion hints after the cursor
//! - Tab-cycled completion of command names and arguments
//! - Command-word highlighting and a themed prompt
//! - Command history persistence
//!
//! The completion logic itself lives in [`completion`] and is pure; the
//! types here adapt it to the line editor's traits and own the session
//! state (active theme, colors, the Tab cycle).

pub mod completion;
pub mod engine;
pub mod helper;
pub mod shared_state;

pub use engine::ReplEngine;
pub use helper::ReplHelper;
pub use shared_state::SharedState;

use crate::commands::CommandRegistry;
use crate::formatter;

/// Print the welcome banner with the available commands.
pub fn print_banner(registry: &CommandRegistry, state: &SharedState) {
    let title = "Welcome to icepuma.dev";

    if state.get_color_enabled() {
        let palette = state.palette();
        println!("{}", palette.accent.paint(title));
    } else {
        println!("{title}");
    }

    println!();
    println!("Available commands:");
    println!("{}", formatter::help_grid(&registry.entries()));
    println!();
}
