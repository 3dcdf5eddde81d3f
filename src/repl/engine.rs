use std::path::Path;
use std::sync::{Arc, Mutex};

use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, KeyEvent,
    Movement, RepeatCount,
};
use tracing::debug;

use crate::commands::CommandRegistry;
use crate::config::HistoryConfig;
use crate::error::{FolioshError, Result};
use crate::repl::completion::{CompletionCycle, CompletionEngine};
use crate::repl::helper::ReplHelper;
use crate::repl::shared_state::SharedState;

/// Prompt shown in front of every input line.
const PROMPT: &str = "guest@icepuma.dev $ ";

/// Tab handler advancing the completion cycle.
///
/// Bound over the editor's built-in completion so that the accept trigger
/// drives the cycling state machine: the whole line is handed to the
/// cycle and replaced with whatever it produces.
struct AcceptTrigger {
    cycle: Arc<Mutex<CompletionCycle>>,
}

impl ConditionalEventHandler for AcceptTrigger {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext,
    ) -> Option<Cmd> {
        let mut cycle = self.cycle.lock().unwrap();
        match cycle.accept(ctx.line()) {
            Some(next) => Some(Cmd::Replace(Movement::WholeLine, Some(next))),
            None => Some(Cmd::Noop),
        }
    }
}

/// REPL engine for interactive command input.
pub struct ReplEngine {
    /// Line editor for command input.
    editor: Editor<ReplHelper, DefaultHistory>,

    /// Shared state with the theme listener.
    shared_state: SharedState,

    /// Completion cycle driven by the Tab binding.
    cycle: Arc<Mutex<CompletionCycle>>,
}

impl ReplEngine {
    /// Create a new REPL engine.
    ///
    /// # Arguments
    /// * `shared_state` - Shared state with the theme listener
    /// * `history_config` - History configuration
    /// * `highlighting_enabled` - Enable syntax highlighting
    /// * `engine` - Completion engine shared with the helper
    /// * `registry` - Command registry for highlighting
    pub fn new(
        shared_state: SharedState,
        history_config: &HistoryConfig,
        highlighting_enabled: bool,
        engine: CompletionEngine,
        registry: Arc<CommandRegistry>,
    ) -> Result<Self> {
        let config = Config::builder()
            .max_history_size(history_config.max_size)?
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        let helper = ReplHelper::new(
            shared_state.clone(),
            engine.clone(),
            registry,
            highlighting_enabled,
        );
        let mut editor = Editor::<ReplHelper, DefaultHistory>::with_config(config)?;
        editor.set_helper(Some(helper));

        // Tab is the accept trigger: it advances the cycling state machine
        // instead of opening the default completion pager.
        let cycle = Arc::new(Mutex::new(CompletionCycle::new(engine)));
        editor.bind_sequence(
            KeyEvent::from('\t'),
            EventHandler::Conditional(Box::new(AcceptTrigger {
                cycle: cycle.clone(),
            })),
        );

        // Load history if persistent
        if history_config.persist {
            let _ = editor.load_history(&history_config.file_path);
        }

        Ok(Self {
            editor,
            shared_state,
            cycle,
        })
    }

    /// Read a single line of input.
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line, or None on EOF / interrupt
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                // Submitting a command ends any in-progress completion cycle.
                self.cycle.lock().unwrap().reset();
                Ok(Some(line))
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ctrl-C
                Ok(None)
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                // Ctrl-D
                Ok(None)
            }
            Err(err) => Err(FolioshError::Generic(format!("Read error: {err}"))),
        }
    }

    /// Save history to file.
    pub fn save_history(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving history");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.editor.save_history(path)?;
        Ok(())
    }

    /// Shared state reference.
    pub fn shared_state(&self) -> &SharedState {
        &self.shared_state
    }
}
