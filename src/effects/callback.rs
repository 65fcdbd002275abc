//! Callback types for hooks and transition actions.
//!
//! Callbacks are factories: each invocation builds a fresh effect, which
//! the machine then runs against its environment.

use crate::effects::AutomataError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Entering or leaving hook of a state. Takes no arguments.
pub type Hook<Env> = Arc<dyn Fn() -> BoxedEffect<(), AutomataError, Env> + Send + Sync>;

/// Side effect of a transition.
///
/// Receives the action arguments given to `step`, or an empty slice when
/// none were given.
pub type Action<A, Env> =
    Arc<dyn Fn(&[A]) -> BoxedEffect<(), AutomataError, Env> + Send + Sync>;
