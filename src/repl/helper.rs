use std::borrow::Cow;
use std::sync::Arc;

use rustyline::Helper as RustyHelper;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;

use crate::commands::CommandRegistry;
use crate::repl::completion::{CompletionEngine, parse_input};
use crate::repl::shared_state::SharedState;

/// Helper for rustyline providing completion, ghost-text hints and
/// highlighting, all driven by the completion engine.
pub struct ReplHelper {
    /// Shared state for the active palette.
    shared_state: SharedState,

    /// Completion engine computing candidates and ghost text.
    engine: CompletionEngine,

    /// Registry used to classify the command word while highlighting.
    registry: Arc<CommandRegistry>,

    /// Enable syntax highlighting.
    highlighting_enabled: bool,
}

impl ReplHelper {
    /// Create a new REPL helper.
    ///
    /// # Arguments
    /// * `shared_state` - Shared state
    /// * `engine` - Completion engine
    /// * `registry` - Command registry
    /// * `highlighting_enabled` - Enable syntax highlighting
    pub fn new(
        shared_state: SharedState,
        engine: CompletionEngine,
        registry: Arc<CommandRegistry>,
        highlighting_enabled: bool,
    ) -> Self {
        Self {
            shared_state,
            engine,
            registry,
            highlighting_enabled,
        }
    }

    fn colors_active(&self) -> bool {
        self.shared_state.get_color_enabled()
    }
}

impl RustyHelper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    /// Complete the token ending at the cursor.
    ///
    /// Delegates to the completion engine on the buffer up to the cursor,
    /// so the candidate list shown by the editor is exactly the list the
    /// Tab cycle walks.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let parsed = parse_input(&line[..pos]);
        let suggestions = self.engine.suggestions(&parsed);

        let token = if parsed.is_completing_command {
            &parsed.command_part
        } else {
            &parsed.arg_part
        };
        let start = pos - token.len();

        let candidates = suggestions
            .into_iter()
            .map(|suggestion| Pair {
                display: suggestion.clone(),
                replacement: suggestion,
            })
            .collect();

        Ok((start, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    /// Ghost text: the remainder of the first suggestion, shown dimmed
    /// after the cursor. Only offered at the end of the line.
    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos != line.len() {
            return None;
        }

        self.engine.hint(&parse_input(line))
    }
}

impl Highlighter for ReplHelper {
    /// Color the command word by whether it matches a registered command.
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighting_enabled || !self.colors_active() || line.is_empty() {
            return Cow::Borrowed(line);
        }

        let palette = self.shared_state.palette();
        let word_end = line.find(' ').unwrap_or(line.len());
        let (word, rest) = line.split_at(word_end);

        let style = if self.registry.get(word).is_some() {
            palette.command_ok
        } else {
            palette.command_err
        };

        Cow::Owned(format!("{}{rest}", style.paint(word)))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        if !self.colors_active() {
            return Cow::Borrowed(prompt);
        }

        let palette = self.shared_state.palette();
        Cow::Owned(palette.prompt.paint(prompt).to_string())
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if !self.colors_active() {
            return Cow::Borrowed(hint);
        }

        let palette = self.shared_state.palette();
        Cow::Owned(palette.hint.paint(hint).to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighting_enabled && self.colors_active() && !line.is_empty()
    }
}

impl Validator for ReplHelper {
    // Single-line command language: every buffer is a complete statement.
}
