//! Errors raised while stepping an automaton.

use thiserror::Error;

/// Errors that can occur during a step.
///
/// `StateNotFound` is the only variant the engine raises itself. The
/// others are built by callers inside their guards, hooks and actions and
/// are passed through without modification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomataError {
    #[error("State {label} is not in the states list")]
    StateNotFound { label: String },

    #[error("Guard evaluation failed: {0}")]
    GuardFailed(String),

    #[error("State hook failed: {0}")]
    HookFailed(String),

    #[error("Transition action failed: {0}")]
    ActionFailed(String),
}

impl AutomataError {
    /// Whether this is the invalid-target-state error.
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::StateNotFound { .. })
    }
}
