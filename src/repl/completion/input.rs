//! Line-buffer parsing for completion.
//!
//! Every keystroke re-derives a [`ParsedInput`] from the raw buffer; the
//! structure is never persisted or mutated in place. Parsing is total:
//! any string, including the empty one, produces a valid decomposition.

/// Structured decomposition of the raw input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The raw buffer, unmodified.
    pub current_input: String,

    /// Buffer with leading/trailing whitespace removed.
    pub trimmed_input: String,

    /// Space-separated tokens of `trimmed_input`. Always non-empty; a
    /// blank buffer yields a single empty token.
    pub words: Vec<String>,

    /// First token, or empty for blank input.
    pub command_part: String,

    /// True iff the user is still typing the command word itself.
    pub is_completing_command: bool,

    /// True iff the user is past the command word (more than one token,
    /// or a trailing space after a single token).
    pub is_completing_argument: bool,

    /// The argument token under completion; empty right after a trailing
    /// space ("show every argument, none typed yet").
    pub arg_part: String,
}

/// Parse the raw buffer into a [`ParsedInput`].
///
/// Tokenization splits on single spaces without collapsing runs, so
/// `"mode  dark"` produces an empty middle token. That quirk is kept
/// deliberately: only the first and last tokens are ever inspected
/// downstream, and normalizing would change how `apply_suggestion`
/// rejoins the buffer.
pub fn parse_input(value: &str) -> ParsedInput {
    let current_input = value.to_string();
    let trimmed_input = value.trim().to_string();
    let words: Vec<String> = trimmed_input.split(' ').map(str::to_string).collect();
    let command_part = words.first().cloned().unwrap_or_default();
    let after_space = current_input.ends_with(' ') && words.len() == 1;

    let is_completing_command =
        words.len() == 1 && !after_space && !command_part.is_empty();
    let is_completing_argument =
        (words.len() > 1 || after_space) && !command_part.is_empty();
    let arg_part = if after_space {
        String::new()
    } else {
        words.last().cloned().unwrap_or_default()
    };

    ParsedInput {
        current_input,
        trimmed_input,
        words,
        command_part,
        is_completing_command,
        is_completing_argument,
        arg_part,
    }
}
