//! Candidate provider for completion suggestions.
//!
//! The engine is generic over where candidates come from; the shell wires
//! in the command registry, tests can substitute fixed tables.

use std::sync::Arc;

use crate::commands::CommandRegistry;

/// Source of completion candidates.
pub trait CandidateProvider: Send + Sync {
    /// All registered command names (lowercase).
    fn command_names(&self) -> Vec<String>;

    /// Accepted first-argument literals for a command, in declared order.
    /// Unknown commands yield an empty list.
    fn arguments_for(&self, command: &str) -> Vec<String>;
}

/// Provider backed by the fixed command registry.
pub struct RegistryProvider {
    registry: Arc<CommandRegistry>,
}

impl RegistryProvider {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }
}

impl CandidateProvider for RegistryProvider {
    fn command_names(&self) -> Vec<String> {
        self.registry.names()
    }

    fn arguments_for(&self, command: &str) -> Vec<String> {
        self.registry
            .arguments_for(command)
            .iter()
            .map(|arg| arg.to_string())
            .collect()
    }
}
