//! Cycling state machine driving the accept trigger (Tab).
//!
//! Two states:
//! - `Idle` - nothing cycled yet; the next accept snapshots suggestions
//!   from the current buffer and applies the first one.
//! - `Cycling` - repeated accepts walk the snapshot in order, wrapping at
//!   the end. The snapshot is deliberately NOT recomputed mid-cycle, so
//!   the candidate list stays stable while the buffer changes underneath.
//!
//! The live buffer is compared against the value the cycle last produced;
//! any divergence (new keystroke, deletion, submitted command) drops back
//! to `Idle` and the next accept starts fresh.
//!
//! One transition crosses the command/argument boundary: when the command
//! token is an exact match and the only candidate for its own prefix,
//! accepting appends a trailing space instead of cycling, which moves
//! completion into argument position (`mode` -> `mode ` -> `mode dark`).
//! An ambiguous snapshot (`m` -> mode, movies) keeps cycling command
//! names instead.

use tracing::trace;

use super::engine::{CompletionEngine, apply_suggestion};
use super::input::parse_input;

/// Internal state of one completion cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CycleState {
    /// No cycle in progress.
    Idle,

    /// Walking a snapshot of suggestions.
    Cycling {
        /// Suggestion snapshot taken when the cycle started.
        suggestions: Vec<String>,

        /// Cursor into `suggestions`; wraps modulo its length.
        index: usize,

        /// Buffer value when the cycle began (for divergence diagnostics).
        original_input: String,

        /// Buffer value the cycle last produced.
        applied: String,

        /// Whether the snapshot holds command names (as opposed to
        /// arguments); gates the boundary transition.
        command_mode: bool,
    },
}

/// Completion cycle for one shell session.
pub struct CompletionCycle {
    engine: CompletionEngine,
    state: CycleState,
}

impl CompletionCycle {
    /// Create an idle cycle over the given engine.
    pub fn new(engine: CompletionEngine) -> Self {
        Self {
            engine,
            state: CycleState::Idle,
        }
    }

    /// Whether a cycling session is active.
    pub fn is_cycling(&self) -> bool {
        matches!(self.state, CycleState::Cycling { .. })
    }

    /// Drop any in-progress cycle (called after a command is submitted).
    pub fn reset(&mut self) {
        self.state = CycleState::Idle;
    }

    /// Handle one accept trigger against the live buffer.
    ///
    /// Returns the new buffer value, or `None` when the trigger is a
    /// no-op (blank input or no matching candidates).
    pub fn accept(&mut self, buffer: &str) -> Option<String> {
        if let CycleState::Cycling {
            suggestions,
            index,
            original_input,
            applied,
            command_mode,
        } = &mut self.state
        {
            if buffer == applied.as_str() {
                // Exact, unambiguous command match: cross into argument
                // completion by appending the separating space.
                if *command_mode && suggestions.len() == 1 {
                    let parsed = parse_input(buffer);
                    let next = format!("{} ", parsed.trimmed_input);
                    self.state = CycleState::Idle;
                    return Some(next);
                }

                *index = (*index + 1) % suggestions.len();
                let parsed = parse_input(buffer);
                let next = apply_suggestion(&suggestions[*index], &parsed);
                *applied = next.clone();
                return Some(next);
            }

            trace!(
                from = original_input.as_str(),
                buffer, "input diverged, resetting completion cycle"
            );
            self.state = CycleState::Idle;
        }

        // Idle: snapshot suggestions for the current buffer.
        let parsed = parse_input(buffer);
        let suggestions = self.engine.suggestions(&parsed);
        if suggestions.is_empty() {
            return None;
        }

        // Typing a full, unambiguous command name: jump straight to
        // argument position rather than re-applying the same name.
        if parsed.is_completing_command
            && suggestions.len() == 1
            && suggestions[0] == parsed.command_part
        {
            return Some(format!("{} ", parsed.trimmed_input));
        }

        let next = apply_suggestion(&suggestions[0], &parsed);
        self.state = CycleState::Cycling {
            suggestions,
            index: 0,
            original_input: buffer.to_string(),
            applied: next.clone(),
            command_mode: parsed.is_completing_command,
        };
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::provider::RegistryProvider;
    use super::*;
    use crate::commands::CommandRegistry;

    fn cycle() -> CompletionCycle {
        let registry = Arc::new(CommandRegistry::new());
        let engine = CompletionEngine::new(Arc::new(RegistryProvider::new(registry)));
        CompletionCycle::new(engine)
    }

    #[test]
    fn test_accept_on_blank_input_is_noop() {
        let mut cycle = cycle();
        assert_eq!(cycle.accept(""), None);
        assert!(!cycle.is_cycling());
    }

    #[test]
    fn test_accept_without_matches_is_noop() {
        let mut cycle = cycle();
        assert_eq!(cycle.accept("zzz"), None);
    }

    #[test]
    fn test_partial_command_completes() {
        let mut cycle = cycle();
        assert_eq!(cycle.accept("he").as_deref(), Some("help"));
        assert!(cycle.is_cycling());
    }

    #[test]
    fn test_exact_command_gets_trailing_space() {
        let mut cycle = cycle();
        assert_eq!(cycle.accept("mode").as_deref(), Some("mode "));
        assert!(!cycle.is_cycling());
    }

    #[test]
    fn test_unique_prefix_then_boundary_transition() {
        // "mod" completes to "mode"; the next accept crosses into
        // argument position instead of re-cycling the single candidate.
        let mut cycle = cycle();
        assert_eq!(cycle.accept("mod").as_deref(), Some("mode"));
        assert_eq!(cycle.accept("mode").as_deref(), Some("mode "));
        assert!(!cycle.is_cycling());
    }

    #[test]
    fn test_argument_cycling_wraps_in_declared_order() {
        let mut cycle = cycle();
        assert_eq!(cycle.accept("mode ").as_deref(), Some("mode dark"));
        assert_eq!(cycle.accept("mode dark").as_deref(), Some("mode light"));
        assert_eq!(cycle.accept("mode light").as_deref(), Some("mode system"));
        assert_eq!(cycle.accept("mode system").as_deref(), Some("mode dark"));
    }

    #[test]
    fn test_ambiguous_commands_cycle_without_boundary() {
        // "mode" is an exact command name, but the snapshot for "m" holds
        // two candidates, so accepting keeps cycling command names.
        let mut cycle = cycle();
        assert_eq!(cycle.accept("m").as_deref(), Some("mode"));
        assert_eq!(cycle.accept("mode").as_deref(), Some("movies"));
        assert_eq!(cycle.accept("movies").as_deref(), Some("mode"));
    }

    #[test]
    fn test_partial_argument_completes() {
        let mut cycle = cycle();
        assert_eq!(cycle.accept("mode d").as_deref(), Some("mode dark"));
    }

    #[test]
    fn test_divergence_resets_cycle() {
        let mut cycle = cycle();
        assert_eq!(cycle.accept("mode ").as_deref(), Some("mode dark"));
        assert!(cycle.is_cycling());

        // The user typed an extra character; the old cycle may not
        // continue and suggestions are recomputed from scratch.
        assert_eq!(cycle.accept("mode darx"), None);
        assert!(!cycle.is_cycling());
    }

    #[test]
    fn test_divergence_then_fresh_cycle() {
        let mut cycle = cycle();
        cycle.accept("mode ");
        // Deleting back to a valid prefix starts a fresh cycle.
        assert_eq!(cycle.accept("mode s").as_deref(), Some("mode system"));
    }

    #[test]
    fn test_reset_after_submit() {
        let mut cycle = cycle();
        cycle.accept("mode ");
        cycle.reset();
        assert!(!cycle.is_cycling());

        // A fresh session behaves exactly like the first.
        assert_eq!(cycle.accept("m").as_deref(), Some("mode"));
    }

    #[test]
    fn test_full_exchange_from_prefix_to_argument() {
        // m -> mode (cycle), movies, mode, then the user submits and the
        // next session completes the argument.
        let mut cycle = cycle();
        assert_eq!(cycle.accept("m").as_deref(), Some("mode"));
        cycle.reset();
        assert_eq!(cycle.accept("mode").as_deref(), Some("mode "));
        assert_eq!(cycle.accept("mode ").as_deref(), Some("mode dark"));
    }
}
