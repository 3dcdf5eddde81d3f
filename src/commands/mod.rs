//! Command registry and dispatch for the portfolio shell.
//!
//! The registry is a fixed mapping from lowercase command name to a
//! [`Command`]; nothing is registered or removed at runtime. Dispatch
//! matches the first whitespace-separated token of the submitted line
//! case-sensitively against the registry (completion is the only place
//! with case folding) and passes the remaining tokens through verbatim.
//!
//! Commands never fail: every path, including unknown commands and bad
//! arguments, produces a [`CommandOutput`] value.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::content::{self, Movie};
use crate::formatter;
use crate::theme::{Theme, ThemeBus};

/// Result of executing one command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Text block to print.
    Text(String),

    /// Clear the terminal screen.
    Clear,

    /// Leave the shell.
    Exit,

    /// Nothing to do (blank input).
    None,
}

/// Shared services the commands run against.
///
/// Injected explicitly so commands stay testable without ambient state:
/// a test can hand in its own bus and dataset.
pub struct CommandContext {
    /// Channel announcing theme switches performed by `mode`.
    pub theme_bus: Arc<ThemeBus>,

    /// Decoded watched-movies dataset.
    pub movies: Vec<Movie>,
}

impl CommandContext {
    /// Create a context from its parts.
    pub fn new(theme_bus: Arc<ThemeBus>, movies: Vec<Movie>) -> Self {
        Self { theme_bus, movies }
    }
}

type CommandFn = fn(&CommandRegistry, &CommandContext, &[String]) -> CommandOutput;

/// A registered command.
pub struct Command {
    /// Lowercase command name, as typed by the user.
    pub name: &'static str,

    /// One-line description shown by `help` and the banner.
    pub description: &'static str,

    run: CommandFn,
}

/// Fixed command table plus the per-command argument vocabulary.
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Command>,
    arguments: BTreeMap<&'static str, &'static [&'static str]>,
}

impl CommandRegistry {
    /// Build the full registry.
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        for command in [
            Command {
                name: "help",
                description: "Lists all available commands.",
                run: cmd_help,
            },
            Command {
                name: "clear",
                description: "Clears the terminal screen.",
                run: cmd_clear,
            },
            Command {
                name: "mode",
                description: "Sets the terminal theme. Usage: mode <dark|light|system>",
                run: cmd_mode,
            },
            Command {
                name: "links",
                description: "Displays links to my profiles.",
                run: cmd_links,
            },
            Command {
                name: "bio",
                description: "Displays a short biography.",
                run: cmd_bio,
            },
            Command {
                name: "projects",
                description: "Lists all my projects.",
                run: cmd_projects,
            },
            Command {
                name: "movies",
                description: "Displays my watched movies from Letterboxd.",
                run: cmd_movies,
            },
            Command {
                name: "exit",
                description: "Exits the shell.",
                run: cmd_exit,
            },
            Command {
                name: "quit",
                description: "Exits the shell.",
                run: cmd_exit,
            },
        ] {
            commands.insert(command.name, command);
        }

        // Argument vocabularies, keyed by command name. Order matters:
        // completion cycles arguments in exactly this order.
        let mut arguments: BTreeMap<&'static str, &'static [&'static str]> = BTreeMap::new();
        arguments.insert("mode", &Theme::NAMES);

        Self {
            commands,
            arguments,
        }
    }

    /// Registered command names, lexicographically ascending.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().map(|name| name.to_string()).collect()
    }

    /// Name/description pairs, lexicographically ascending by name.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        self.commands
            .values()
            .map(|cmd| (cmd.name, cmd.description))
            .collect()
    }

    /// Look up a command by its exact name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Accepted first-argument literals for a command, in declared order.
    ///
    /// Unknown commands yield an empty vocabulary rather than an error.
    pub fn arguments_for(&self, command: &str) -> &[&'static str] {
        self.arguments.get(command).copied().unwrap_or(&[])
    }

    /// Execute a submitted line.
    ///
    /// The first whitespace-separated token selects the command
    /// (case-sensitive); the remaining tokens are its arguments.
    pub fn dispatch(&self, ctx: &CommandContext, input: &str) -> CommandOutput {
        let mut tokens = input.split_whitespace();
        let Some(name) = tokens.next() else {
            return CommandOutput::None;
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        match self.get(name) {
            Some(command) => {
                tracing::debug!(command = command.name, args = ?args, "dispatching");
                (command.run)(self, ctx, &args)
            }
            None => CommandOutput::Text(format!("Command not found: {name}")),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/* ========================= Command implementations ========================= */

fn cmd_help(registry: &CommandRegistry, _ctx: &CommandContext, _args: &[String]) -> CommandOutput {
    CommandOutput::Text(formatter::help_grid(&registry.entries()))
}

fn cmd_clear(_: &CommandRegistry, _ctx: &CommandContext, _args: &[String]) -> CommandOutput {
    CommandOutput::Clear
}

fn cmd_mode(_: &CommandRegistry, ctx: &CommandContext, args: &[String]) -> CommandOutput {
    let theme = args
        .first()
        .and_then(|raw| raw.to_lowercase().parse::<Theme>().ok());

    match theme {
        Some(theme) => {
            ctx.theme_bus.broadcast(theme);
            CommandOutput::Text(format!("Theme set to {theme}"))
        }
        None => CommandOutput::Text("Invalid theme. Use: mode <dark|light|system>".to_string()),
    }
}

fn cmd_links(_: &CommandRegistry, _ctx: &CommandContext, _args: &[String]) -> CommandOutput {
    CommandOutput::Text(formatter::links_grid(content::SOCIAL_LINKS))
}

fn cmd_bio(_: &CommandRegistry, _ctx: &CommandContext, _args: &[String]) -> CommandOutput {
    CommandOutput::Text(content::BIO.to_string())
}

fn cmd_projects(_: &CommandRegistry, _ctx: &CommandContext, _args: &[String]) -> CommandOutput {
    CommandOutput::Text(formatter::projects_table(content::PROJECTS))
}

fn cmd_movies(_: &CommandRegistry, ctx: &CommandContext, _args: &[String]) -> CommandOutput {
    CommandOutput::Text(formatter::movies_overview(
        &ctx.movies,
        content::LETTERBOXD_PROFILE,
    ))
}

fn cmd_exit(_: &CommandRegistry, _ctx: &CommandContext, _args: &[String]) -> CommandOutput {
    CommandOutput::Exit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> CommandContext {
        CommandContext::new(Arc::new(ThemeBus::new()), content::load_movies().unwrap())
    }

    #[test]
    fn test_registry_names_sorted() {
        let registry = CommandRegistry::new();
        let names = registry.names();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        for required in ["help", "clear", "mode", "links", "bio", "projects"] {
            assert!(names.iter().any(|n| n == required), "missing {required}");
        }
    }

    #[test]
    fn test_mode_vocabulary_order() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.arguments_for("mode"), ["dark", "light", "system"]);
    }

    #[test]
    fn test_unknown_command_vocabulary_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.arguments_for("nope").is_empty());
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let registry = CommandRegistry::new();
        let output = registry.dispatch(&test_context(), "unknowncommand");

        assert_eq!(
            output,
            CommandOutput::Text("Command not found: unknowncommand".to_string())
        );
    }

    #[test]
    fn test_dispatch_is_case_sensitive() {
        let registry = CommandRegistry::new();
        let output = registry.dispatch(&test_context(), "HELP");

        assert_eq!(
            output,
            CommandOutput::Text("Command not found: HELP".to_string())
        );
    }

    #[test]
    fn test_dispatch_blank_input() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.dispatch(&test_context(), "   "), CommandOutput::None);
    }

    #[test]
    fn test_help_lists_every_command() {
        let registry = CommandRegistry::new();
        let CommandOutput::Text(text) = registry.dispatch(&test_context(), "help") else {
            panic!("help must produce text");
        };

        for name in registry.names() {
            assert!(text.contains(&name), "help output missing {name}");
        }
        assert!(text.contains("Clears the terminal screen."));
    }

    #[test]
    fn test_mode_valid_argument_broadcasts() {
        let registry = CommandRegistry::new();
        let ctx = test_context();
        let rx = ctx.theme_bus.subscribe();

        let output = registry.dispatch(&ctx, "mode dark");

        assert_eq!(output, CommandOutput::Text("Theme set to dark".to_string()));
        assert_eq!(rx.try_recv().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_mode_argument_case_insensitive() {
        let registry = CommandRegistry::new();
        let ctx = test_context();

        let output = registry.dispatch(&ctx, "mode LIGHT");
        assert_eq!(output, CommandOutput::Text("Theme set to light".to_string()));
    }

    #[test]
    fn test_mode_invalid_argument() {
        let registry = CommandRegistry::new();
        let ctx = test_context();
        let rx = ctx.theme_bus.subscribe();

        let output = registry.dispatch(&ctx, "mode xyz");

        assert_eq!(
            output,
            CommandOutput::Text("Invalid theme. Use: mode <dark|light|system>".to_string())
        );
        assert!(rx.try_recv().is_err(), "invalid argument must not broadcast");
    }

    #[test]
    fn test_mode_missing_argument() {
        let registry = CommandRegistry::new();
        let output = registry.dispatch(&test_context(), "mode");

        assert_eq!(
            output,
            CommandOutput::Text("Invalid theme. Use: mode <dark|light|system>".to_string())
        );
    }

    #[test]
    fn test_clear_and_exit_outputs() {
        let registry = CommandRegistry::new();
        let ctx = test_context();

        assert_eq!(registry.dispatch(&ctx, "clear"), CommandOutput::Clear);
        assert_eq!(registry.dispatch(&ctx, "exit"), CommandOutput::Exit);
        assert_eq!(registry.dispatch(&ctx, "quit"), CommandOutput::Exit);
    }

    #[test]
    fn test_bio_output() {
        let registry = CommandRegistry::new();
        let CommandOutput::Text(text) = registry.dispatch(&test_context(), "bio") else {
            panic!("bio must produce text");
        };

        assert!(text.contains("38-year-old software developer"));
        assert!(text.contains("Berlin, Germany"));
        assert!(text.contains("3D printing"));
        assert!(text.contains("Rust"));
    }

    #[test]
    fn test_projects_output() {
        let registry = CommandRegistry::new();
        let CommandOutput::Text(text) = registry.dispatch(&test_context(), "projects") else {
            panic!("projects must produce text");
        };

        assert!(text.contains("cidrrr"));
        assert!(text.contains("fbtoggl"));
        assert!(text.contains("rawkode.studio"));
    }

    #[test]
    fn test_movies_output() {
        let registry = CommandRegistry::new();
        let ctx = test_context();
        let CommandOutput::Text(text) = registry.dispatch(&ctx, "movies") else {
            panic!("movies must produce text");
        };

        assert!(text.starts_with(&format!("Movies watched: {}", ctx.movies.len())));
        assert!(text.contains("letterboxd.com/icepuma/films"));
    }

    #[test]
    fn test_extra_arguments_passed_verbatim() {
        // Extra tokens are forwarded; commands that take none ignore them.
        let registry = CommandRegistry::new();
        let output = registry.dispatch(&test_context(), "bio now please");
        assert!(matches!(output, CommandOutput::Text(_)));
    }
}
