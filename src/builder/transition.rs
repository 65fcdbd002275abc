//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, StateRef};
use crate::effects::{Action, AutomataError, Transition};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Builder for constructing transitions with a fluent API.
///
/// A transition built without a guard accepts every event.
pub struct TransitionBuilder<L, E, A, Env> {
    from: Option<StateRef<L, Env>>,
    to: Option<StateRef<L, Env>>,
    guard: Option<Guard<E, Env>>,
    action: Option<Action<A, Env>>,
}

impl<L, E: 'static, A, Env: Clone + Send + Sync + 'static> TransitionBuilder<L, E, A, Env> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: &StateRef<L, Env>) -> Self {
        self.from = Some(Arc::clone(state));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: &StateRef<L, Env>) -> Self {
        self.to = Some(Arc::clone(state));
        self
    }

    /// Set the guard (optional).
    pub fn guard(mut self, guard: Guard<E, Env>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the guard from a synchronous predicate (optional).
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&[E]) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Set the action (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&[A]) -> BoxedEffect<(), AutomataError, Env> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<L, E, A, Env>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let guard = self.guard.unwrap_or_else(Guard::always);

        let transition = Transition::new(from, to, guard);
        Ok(match self.action {
            Some(action) => transition.with_shared_action(action),
            None => transition,
        })
    }
}

impl<L, E: 'static, A, Env: Clone + Send + Sync + 'static> Default
    for TransitionBuilder<L, E, A, Env>
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchMode, State};
    use stillwater::prelude::*;

    type Builder = TransitionBuilder<&'static str, u32, u32, ()>;

    fn states() -> (StateRef<&'static str, ()>, StateRef<&'static str, ()>) {
        (State::new("idle").into_ref(), State::new("busy").into_ref())
    }

    #[test]
    fn builder_requires_from_state() {
        let (_, busy) = states();
        let result = Builder::new().to(&busy).build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_requires_to_state() {
        let (idle, _) = states();
        let result = Builder::new().from(&idle).build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[tokio::test]
    async fn missing_guard_accepts_everything() {
        let (idle, busy) = states();
        let transition = Builder::new().from(&idle).to(&busy).build().unwrap();

        assert!(transition
            .check(&idle, &[1, 2, 3], MatchMode::Identity, &())
            .await
            .unwrap());
        assert!(transition.action().is_none());
    }

    #[tokio::test]
    async fn when_installs_predicate() {
        let (idle, busy) = states();
        let transition = Builder::new()
            .from(&idle)
            .to(&busy)
            .when(|args: &[u32]| args.first() == Some(&1))
            .build()
            .unwrap();

        assert!(transition
            .check(&idle, &[1], MatchMode::Identity, &())
            .await
            .unwrap());
        assert!(!transition
            .check(&idle, &[2], MatchMode::Identity, &())
            .await
            .unwrap());
    }

    #[test]
    fn fluent_api_builds_transition() {
        let (idle, busy) = states();
        let transition = Builder::new()
            .from(&idle)
            .to(&busy)
            .action(|_: &[u32]| pure(()).boxed())
            .build()
            .unwrap();

        assert!(Arc::ptr_eq(transition.from_state(), &idle));
        assert!(Arc::ptr_eq(transition.next_state(), &busy));
        assert!(transition.action().is_some());
    }
}
