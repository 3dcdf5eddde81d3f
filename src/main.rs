//! foliosh - a personal portfolio as a terminal shell
//!
//! An interactive shell that serves a personal portfolio: biography,
//! social links, project listing and watched movies, with ghost-text
//! autocompletion, Tab-cycled suggestions and a persisted theme.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! foliosh
//!
//! # One-shot execution
//! foliosh --eval projects
//! ```

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use tracing::Level;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod content;
mod error;
mod formatter;
mod repl;
mod theme;

use cli::CliInterface;
use commands::{CommandContext, CommandOutput, CommandRegistry};
use error::Result;
use repl::completion::{CompletionEngine, RegistryProvider};
use repl::{ReplEngine, SharedState};
use theme::{FileThemeStore, Theme, ThemeBus, ThemeStore};

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands (version, completion, config)
/// 4. Run one-shot `--eval` or the interactive shell
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    let registry = Arc::new(CommandRegistry::new());
    let theme_bus = Arc::new(ThemeBus::new());
    let theme_events = theme_bus.subscribe();
    let store = FileThemeStore::new(cli.config_path());
    let theme = store.load()?;

    let shared_state = SharedState::new(theme, cli.config().display.color_output);
    let ctx = CommandContext::new(theme_bus, content::load_movies()?);

    if let Some(line) = cli.args().eval.clone() {
        return run_eval(&registry, &ctx, &line, &theme_events, &store, &shared_state);
    }

    run_interactive(&cli, registry, ctx, theme_events, store, shared_state)
}

/// Execute a single command line and exit.
fn run_eval(
    registry: &CommandRegistry,
    ctx: &CommandContext,
    line: &str,
    theme_events: &Receiver<Theme>,
    store: &dyn ThemeStore,
    shared_state: &SharedState,
) -> Result<()> {
    let output = registry.dispatch(ctx, line);
    print_output(&output)?;
    drain_theme_events(theme_events, store, shared_state);
    Ok(())
}

/// Run the interactive shell until exit or EOF.
fn run_interactive(
    cli: &CliInterface,
    registry: Arc<CommandRegistry>,
    ctx: CommandContext,
    theme_events: Receiver<Theme>,
    store: FileThemeStore,
    shared_state: SharedState,
) -> Result<()> {
    let engine = CompletionEngine::new(Arc::new(RegistryProvider::new(registry.clone())));
    let mut repl = ReplEngine::new(
        shared_state.clone(),
        &cli.config().history,
        cli.config().display.syntax_highlighting,
        engine,
        registry.clone(),
    )?;

    if !cli.args().quiet {
        repl::print_banner(&registry, &shared_state);
    }

    loop {
        let input = match repl.read_line()? {
            Some(line) if !line.trim().is_empty() => line,
            Some(_) => continue,
            None => break,
        };

        let output = registry.dispatch(&ctx, &input);
        let keep_running = !matches!(output, CommandOutput::Exit);
        print_output(&output)?;

        // Theme switches announced by `mode` are applied to the session
        // and persisted between commands.
        drain_theme_events(&theme_events, &store, &shared_state);

        if !keep_running {
            break;
        }
    }

    if cli.config().history.persist {
        repl.save_history(&cli.config().history.file_path)?;
    }

    println!("Goodbye!");
    Ok(())
}

/// Render one command output to the terminal.
fn print_output(output: &CommandOutput) -> Result<()> {
    match output {
        CommandOutput::Text(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
        CommandOutput::Clear => clear_screen()?,
        CommandOutput::Exit | CommandOutput::None => {}
    }
    Ok(())
}

/// Clear the visible terminal and park the cursor at the top.
fn clear_screen() -> Result<()> {
    use crossterm::{
        cursor::MoveTo,
        execute,
        terminal::{Clear, ClearType},
    };

    execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Apply and persist pending theme-change notifications.
fn drain_theme_events(
    theme_events: &Receiver<Theme>,
    store: &dyn ThemeStore,
    shared_state: &SharedState,
) {
    while let Ok(theme) = theme_events.try_recv() {
        shared_state.set_theme(theme);
        if let Err(e) = store.set(theme) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
    }
}

/// Initialize logging system based on verbosity level
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
