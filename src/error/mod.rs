//! Error handling module for foliosh.
//!
//! This module provides the crate-wide error taxonomy:
//! - A single top-level [`FolioshError`] wrapping more specific kinds
//! - A crate-wide [`Result`] alias
//! - Conversions from library errors (I/O, readline) into the top-level type
//!
//! The interactive core (parsing, completion, dispatch) is total over
//! well-formed string input and reports user-facing conditions as command
//! output, not as errors; these types cover the ambient concerns around it
//! (configuration, theme persistence, embedded content, terminal I/O).

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, ContentError, FolioshError, Result, ThemeError};
