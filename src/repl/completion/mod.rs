//! Completion subsystem for the portfolio shell.
//!
//! Layered exactly as the data flows:
//! 1. [`input`] parses the raw buffer into a [`ParsedInput`]
//! 2. [`engine`] turns a parse into suggestions, ghost text and applied
//!    buffers
//! 3. [`fsm`] owns the only mutable piece: the Tab-driven cycling state
//! 4. [`provider`] abstracts where candidates come from
//!
//! Everything below the FSM is pure and total over arbitrary strings.

pub mod engine;
pub mod fsm;
pub mod input;
pub mod provider;

pub use engine::{CompletionEngine, apply_suggestion, ghost_text};
pub use fsm::CompletionCycle;
pub use input::{ParsedInput, parse_input};
pub use provider::{CandidateProvider, RegistryProvider};
