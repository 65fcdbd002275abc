//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{MatchMode, StateRef};
use crate::effects::{Automata, Delay, Transition};
use std::fmt::Debug;
use std::sync::Arc;

/// Builder for constructing automata with a fluent API.
///
/// The builder does not check that the initial state or transition targets
/// are among the declared states; targets are checked when they fire.
pub struct AutomataBuilder<L, E, A, Env> {
    initial: Option<StateRef<L, Env>>,
    states: Vec<StateRef<L, Env>>,
    transitions: Vec<Transition<L, E, A, Env>>,
    match_mode: MatchMode,
    delay: Option<Arc<dyn Delay>>,
}

impl<L, E, A, Env> AutomataBuilder<L, E, A, Env>
where
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    E: 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            transitions: Vec::new(),
            match_mode: MatchMode::default(),
            delay: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: &StateRef<L, Env>) -> Self {
        self.initial = Some(Arc::clone(state));
        self
    }

    /// Declare a state.
    pub fn state(mut self, state: &StateRef<L, Env>) -> Self {
        self.states.push(Arc::clone(state));
        self
    }

    /// Declare several states at once.
    pub fn states<'a, I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = &'a StateRef<L, Env>>,
    {
        self.states.extend(states.into_iter().map(Arc::clone));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<L, E, A, Env>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<L, E, A, Env>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions(mut self, transitions: Vec<Transition<L, E, A, Env>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Build the automaton.
    pub fn build(self) -> Result<Automata<L, E, A, Env>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let machine =
            Automata::new(initial, self.states, self.transitions).with_match_mode(self.match_mode);
        Ok(match self.delay {
            Some(delay) => machine.with_delay(delay),
            None => machine,
        })
    }
}

impl<L, E, A, Env> Default for AutomataBuilder<L, E, A, Env>
where
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    E: 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
