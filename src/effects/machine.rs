//! Automaton that drives guarded transitions one step at a time.

use crate::core::{MatchMode, StateRef, StepHistory, StepRecord};
use crate::effects::delay::{Delay, TokioDelay};
use crate::effects::transition::Transition;
use crate::effects::AutomataError;
use chrono::Utc;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use stillwater::effect::Effect;
use tracing::{debug, trace, warn};

/// Finite state machine over a declared set of states and an ordered list
/// of transitions.
///
/// Transition order is priority: `step` fires the first transition whose
/// source matches the current state and whose guard accepts the event.
pub struct Automata<L, E, A, Env> {
    states: Vec<StateRef<L, Env>>,
    transitions: Vec<Transition<L, E, A, Env>>,
    initial: StateRef<L, Env>,
    current: StateRef<L, Env>,
    match_mode: MatchMode,
    delay: Arc<dyn Delay>,
    history: StepHistory<L>,
}

impl<L, E, A, Env> Automata<L, E, A, Env>
where
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    E: 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Create a machine positioned at `initial`.
    ///
    /// Nothing is validated here: whether a transition's target belongs to
    /// `states` is checked when that transition fires.
    pub fn new(
        initial: StateRef<L, Env>,
        states: Vec<StateRef<L, Env>>,
        transitions: Vec<Transition<L, E, A, Env>>,
    ) -> Self {
        Self {
            states,
            transitions,
            current: Arc::clone(&initial),
            initial,
            match_mode: MatchMode::default(),
            delay: Arc::new(TokioDelay),
            history: StepHistory::new(),
        }
    }

    /// Choose how states are compared.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Replace the delay used by `step_after_timeout`.
    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &StateRef<L, Env> {
        &self.current
    }

    pub fn initial_state(&self) -> &StateRef<L, Env> {
        &self.initial
    }

    pub fn states(&self) -> &[StateRef<L, Env>] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition<L, E, A, Env>] {
        &self.transitions
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Steps taken so far.
    pub fn history(&self) -> &StepHistory<L> {
        &self.history
    }

    /// Forget the steps recorded so far.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if the current state is final (pure)
    pub fn done(&self) -> bool {
        self.current.is_final()
    }

    /// Whether `state` is one of the declared states.
    pub fn has_state(&self, state: &StateRef<L, Env>) -> bool {
        self.states
            .iter()
            .any(|candidate| self.match_mode.matches(candidate, state))
    }

    /// Attempt a single transition.
    ///
    /// Returns `Ok(false)` and leaves the machine untouched when no
    /// transition applies. When one does, the order is: leaving hook of the
    /// current state, the action (with `action_args`, or no arguments),
    /// the swap to the target state, then the target's entering hook. Each
    /// effect completes before the next starts.
    ///
    /// # Errors
    ///
    /// `AutomataError::StateNotFound` if the selected transition targets a
    /// state outside the declared set; nothing has run at that point.
    /// Errors from guards, hooks and actions are returned as-is. If the
    /// leaving hook or the action fails, the current state is unchanged.
    pub async fn step(
        &mut self,
        event_args: &[E],
        action_args: Option<&[A]>,
        env: &Env,
    ) -> Result<bool, AutomataError> {
        let Some(index) = self.select(event_args, env).await? else {
            debug!(state = ?self.current.label(), "No transition matched");
            return Ok(false);
        };

        let transition = &self.transitions[index];
        let target = Arc::clone(transition.next_state());
        let action = transition.action().cloned();

        if !self.has_state(&target) {
            warn!(
                transition = index,
                target = ?target.label(),
                "Transition targets a state outside the states list"
            );
            return Err(AutomataError::StateNotFound {
                label: format!("{:?}", target.label()),
            });
        }

        if let Some(hook) = self.current.leaving_hook() {
            hook().run(env).await?;
        }

        if let Some(action) = action {
            action(action_args.unwrap_or(&[])).run(env).await?;
        }

        self.change_state(index, target, env).await?;
        Ok(true)
    }

    /// Wait for `delay`, then attempt a step exactly as `step` does.
    pub async fn step_after_timeout(
        &mut self,
        delay: Duration,
        event_args: &[E],
        action_args: Option<&[A]>,
        env: &Env,
    ) -> Result<bool, AutomataError> {
        trace!(?delay, "Delaying step");
        self.delay.delay(delay).await;
        self.step(event_args, action_args, env).await
    }

    /// Index of the first transition that applies to the current state.
    async fn select(&self, event_args: &[E], env: &Env) -> Result<Option<usize>, AutomataError> {
        for (index, transition) in self.transitions.iter().enumerate() {
            let accepted = transition
                .check(&self.current, event_args, self.match_mode, env)
                .await?;
            trace!(transition = index, accepted, "Checked transition");
            if accepted {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    async fn change_state(
        &mut self,
        index: usize,
        target: StateRef<L, Env>,
        env: &Env,
    ) -> Result<(), AutomataError> {
        let previous = std::mem::replace(&mut self.current, target);
        debug!(
            from = ?previous.label(),
            to = ?self.current.label(),
            transition = index,
            "Transition fired"
        );
        self.history.push(StepRecord {
            from: previous.label().clone(),
            to: self.current.label().clone(),
            transition: index,
            timestamp: Utc::now(),
        });

        if let Some(hook) = self.current.entering_hook() {
            hook().run(env).await?;
        }
        Ok(())
    }
}
