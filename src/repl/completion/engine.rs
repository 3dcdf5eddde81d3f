//! Completion engine - suggestions, ghost text, suggestion application.
//!
//! Three pure operations over a parsed buffer:
//! - [`CompletionEngine::suggestions`] ranks candidates for the token
//!   under completion
//! - [`ghost_text`] computes the inline preview shown after the cursor
//! - [`apply_suggestion`] produces the new buffer for an accepted
//!   suggestion
//!
//! Command names are matched case-insensitively on the typed side only
//! (registered names are already lowercase) and returned sorted.
//! Argument vocabularies keep their declared order: for `mode` that order
//! encodes the cycling sequence dark -> light -> system.

use std::sync::Arc;

use super::input::ParsedInput;
use super::provider::CandidateProvider;

/// Completion engine over a candidate provider.
#[derive(Clone)]
pub struct CompletionEngine {
    provider: Arc<dyn CandidateProvider>,
}

impl CompletionEngine {
    /// Create a new completion engine.
    pub fn new(provider: Arc<dyn CandidateProvider>) -> Self {
        Self { provider }
    }

    /// Candidates for the token currently under completion.
    ///
    /// Command mode: registered names with the typed prefix, sorted
    /// ascending. Argument mode: the command's vocabulary in declared
    /// order, the full list when no argument has been typed yet. Unknown
    /// commands and blank input degrade to an empty list.
    pub fn suggestions(&self, parsed: &ParsedInput) -> Vec<String> {
        if parsed.is_completing_command {
            let prefix = parsed.command_part.to_lowercase();
            let mut names: Vec<String> = self
                .provider
                .command_names()
                .into_iter()
                .filter(|name| name.starts_with(&prefix))
                .collect();
            names.sort();
            return names;
        }

        if parsed.is_completing_argument {
            let vocabulary = self.provider.arguments_for(&parsed.command_part);
            if parsed.arg_part.is_empty() {
                return vocabulary;
            }
            let prefix = parsed.arg_part.to_lowercase();
            return vocabulary
                .into_iter()
                .filter(|arg| arg.starts_with(&prefix))
                .collect();
        }

        Vec::new()
    }

    /// Ghost text for the current buffer: the remainder of the first
    /// suggestion past the token being typed, or `None` when there is
    /// nothing to preview.
    pub fn hint(&self, parsed: &ParsedInput) -> Option<String> {
        let suggestions = self.suggestions(parsed);
        let first = suggestions.first()?;

        let typed = if parsed.is_completing_command {
            &parsed.command_part
        } else {
            &parsed.arg_part
        };

        let ghost = ghost_text(typed, first);
        (!ghost.is_empty()).then_some(ghost)
    }
}

/// Compute the inline preview for a suggestion.
///
/// If `suggestion` is a case-insensitive prefix-superset of `input` and
/// strictly longer, the trailing remainder is returned; an empty input
/// primes the full suggestion. Anything else yields an empty string.
pub fn ghost_text(input: &str, suggestion: &str) -> String {
    if suggestion.to_lowercase().starts_with(&input.to_lowercase())
        && suggestion.len() > input.len()
    {
        // get() keeps this total even if a multi-byte input lands inside
        // a character of the suggestion.
        return suggestion.get(input.len()..).unwrap_or_default().to_string();
    }

    if input.is_empty() {
        suggestion.to_string()
    } else {
        String::new()
    }
}

/// Produce the new buffer for an accepted suggestion.
///
/// Pure: the parsed view is read, never mutated. Command mode replaces
/// the whole buffer; argument mode appends after a lone trailing-space
/// word or swaps the final token and rejoins with single spaces; blank
/// input is returned unchanged.
pub fn apply_suggestion(suggestion: &str, parsed: &ParsedInput) -> String {
    if parsed.is_completing_command {
        return suggestion.to_string();
    }

    if parsed.is_completing_argument {
        if parsed.current_input.ends_with(' ') && parsed.words.len() == 1 {
            return format!("{} {suggestion}", parsed.trimmed_input);
        }
        let mut words = parsed.words.clone();
        if let Some(last) = words.last_mut() {
            *last = suggestion.to_string();
        }
        return words.join(" ");
    }

    parsed.current_input.clone()
}
