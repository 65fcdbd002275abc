//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders and helper constructors for
//! assembling automata without spelling out every field.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::AutomataBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, StateRef};
use crate::effects::Transition;
use std::sync::Arc;

/// Create an unconditional transition without an action.
///
/// # Example
///
/// ```
/// use automata::builder::simple_transition;
/// use automata::core::State;
/// use automata::effects::Transition;
///
/// let start = State::<&str, ()>::new("start").into_ref();
/// let end = State::<&str, ()>::new("end").terminal().into_ref();
///
/// let transition: Transition<&str, u32, u32, ()> = simple_transition(&start, &end);
/// assert!(transition.next_state().is_final());
/// ```
pub fn simple_transition<L, E, A, Env>(
    from: &StateRef<L, Env>,
    to: &StateRef<L, Env>,
) -> Transition<L, E, A, Env>
where
    E: 'static,
    Env: Clone + Send + Sync + 'static,
{
    Transition::new(Arc::clone(from), Arc::clone(to), Guard::always())
}

/// Create a transition guarded by a synchronous predicate.
///
/// # Example
///
/// ```
/// use automata::builder::guarded_transition;
/// use automata::core::State;
/// use automata::effects::Transition;
///
/// let low = State::<&str, ()>::new("low").into_ref();
/// let high = State::<&str, ()>::new("high").into_ref();
///
/// let rising: Transition<&str, i32, (), ()> =
///     guarded_transition(&low, &high, |args: &[i32]| args.iter().all(|v| *v > 0));
/// ```
pub fn guarded_transition<L, E, A, Env, F>(
    from: &StateRef<L, Env>,
    to: &StateRef<L, Env>,
    predicate: F,
) -> Transition<L, E, A, Env>
where
    E: 'static,
    Env: Clone + Send + Sync + 'static,
    F: Fn(&[E]) -> bool + Send + Sync + 'static,
{
    Transition::new(Arc::clone(from), Arc::clone(to), Guard::new(predicate))
}
