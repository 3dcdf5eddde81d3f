//! foliosh - a personal portfolio as a terminal shell
//!
//! This library provides the building blocks of the foliosh binary. It can
//! be embedded to drive the same command set and completion behavior from
//! other front ends.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `commands`: Command registry, dispatch and the command implementations
//! - `config`: Configuration management
//! - `content`: Static portfolio content and embedded datasets
//! - `error`: Error types and handling
//! - `formatter`: Output rendering
//! - `repl`: Interactive shell engine and the completion subsystem
//! - `theme`: Theme model, persistence and change notifications
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use foliosh::commands::{CommandContext, CommandRegistry};
//! use foliosh::content;
//! use foliosh::theme::ThemeBus;
//!
//! fn main() -> foliosh::error::Result<()> {
//!     let registry = CommandRegistry::new();
//!     let ctx = CommandContext::new(Arc::new(ThemeBus::new()), content::load_movies()?);
//!
//!     let output = registry.dispatch(&ctx, "projects");
//!     println!("{output:?}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod formatter;
pub mod repl;
pub mod theme;

// Re-export commonly used types
pub use commands::{CommandContext, CommandOutput, CommandRegistry};
pub use config::Config;
pub use error::{FolioshError, Result};
pub use repl::completion::{CompletionCycle, CompletionEngine, ParsedInput, parse_input};
pub use repl::{ReplEngine, SharedState};
pub use theme::{Theme, ThemeBus, ThemeStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
