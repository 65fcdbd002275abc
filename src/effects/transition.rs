//! Guarded transitions between states.

use crate::core::{Guard, MatchMode, StateRef};
use crate::effects::{Action, AutomataError};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// A directed edge from one state to another, guarded by a predicate on
/// the event arguments and optionally carrying an action.
pub struct Transition<L, E, A, Env> {
    from: StateRef<L, Env>,
    to: StateRef<L, Env>,
    guard: Guard<E, Env>,
    action: Option<Action<A, Env>>,
}

impl<L, E, A, Env> Transition<L, E, A, Env> {
    /// Create a transition without an action.
    pub fn new(from: StateRef<L, Env>, to: StateRef<L, Env>, guard: Guard<E, Env>) -> Self {
        Self {
            from,
            to,
            guard,
            action: None,
        }
    }

    /// Attach an action built from a closure.
    pub fn with_action<F>(self, action: F) -> Self
    where
        F: Fn(&[A]) -> BoxedEffect<(), AutomataError, Env> + Send + Sync + 'static,
    {
        self.with_shared_action(Arc::new(action))
    }

    /// Attach an already shared action.
    pub fn with_shared_action(mut self, action: Action<A, Env>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn from_state(&self) -> &StateRef<L, Env> {
        &self.from
    }

    /// The state this transition leads to.
    pub fn next_state(&self) -> &StateRef<L, Env> {
        &self.to
    }

    pub fn guard(&self) -> &Guard<E, Env> {
        &self.guard
    }

    pub fn action(&self) -> Option<&Action<A, Env>> {
        self.action.as_ref()
    }
}

impl<L, E, A, Env> Transition<L, E, A, Env>
where
    L: PartialEq,
    E: 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Check whether this transition applies to `candidate` for the given
    /// event arguments.
    ///
    /// The guard is only evaluated when `candidate` matches the source
    /// state under `mode`.
    pub async fn check(
        &self,
        candidate: &StateRef<L, Env>,
        event_args: &[E],
        mode: MatchMode,
        env: &Env,
    ) -> Result<bool, AutomataError> {
        if !mode.matches(candidate, &self.from) {
            return Ok(false);
        }
        self.guard.evaluate(event_args, env).await
    }
}

impl<L, E, A, Env> Clone for Transition<L, E, A, Env> {
    fn clone(&self) -> Self {
        Self {
            from: Arc::clone(&self.from),
            to: Arc::clone(&self.to),
            guard: self.guard.clone(),
            action: self.action.clone(),
        }
    }
}
