//! States of an automaton and how two states are compared.
//!
//! A `State` is an immutable record: a caller-defined label, a terminal
//! flag and optional entering/leaving hooks. States are shared between the
//! caller, the transitions that point at them and the machine itself
//! through [`StateRef`].

use crate::effects::{AutomataError, Hook};
use std::fmt::{self, Debug};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Shared handle to a state.
pub type StateRef<L, Env> = Arc<State<L, Env>>;

/// How the machine decides that two state handles denote the same state.
///
/// The mode is used both when matching a transition's source against the
/// current state and when checking that a target belongs to the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Same allocation (`Arc::ptr_eq`).
    #[default]
    Identity,

    /// Equal labels, equal terminal flags and identical hooks.
    ///
    /// Two distinct states built from the same label and hooks are
    /// indistinguishable in this mode.
    Structural,
}

impl MatchMode {
    /// Check whether `a` and `b` denote the same state under this mode.
    pub fn matches<L: PartialEq, Env>(self, a: &StateRef<L, Env>, b: &StateRef<L, Env>) -> bool {
        match self {
            Self::Identity => Arc::ptr_eq(a, b),
            Self::Structural => Arc::ptr_eq(a, b) || a.structurally_eq(b),
        }
    }
}

/// A labeled node of the automaton.
///
/// # Example
///
/// ```rust
/// use automata::core::State;
///
/// let idle = State::<&str, ()>::new("idle").into_ref();
/// let done = State::<&str, ()>::new("done").terminal().into_ref();
///
/// assert_eq!(*idle.label(), "idle");
/// assert!(!idle.is_final());
/// assert!(done.is_final());
/// ```
pub struct State<L, Env> {
    label: L,
    is_final: bool,
    entering_hook: Option<Hook<Env>>,
    leaving_hook: Option<Hook<Env>>,
}

impl<L, Env> State<L, Env> {
    /// Create a non-final state without hooks.
    pub fn new(label: L) -> Self {
        Self {
            label,
            is_final: false,
            entering_hook: None,
            leaving_hook: None,
        }
    }

    /// Mark the state as terminal.
    pub fn terminal(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Set the hook fired when this state becomes current.
    pub fn on_enter<F>(self, hook: F) -> Self
    where
        F: Fn() -> BoxedEffect<(), AutomataError, Env> + Send + Sync + 'static,
    {
        self.with_entering_hook(Arc::new(hook))
    }

    /// Set the hook fired when this state stops being current.
    pub fn on_leave<F>(self, hook: F) -> Self
    where
        F: Fn() -> BoxedEffect<(), AutomataError, Env> + Send + Sync + 'static,
    {
        self.with_leaving_hook(Arc::new(hook))
    }

    /// Set an already shared entering hook.
    ///
    /// Sharing one hook between states keeps them structurally equal.
    pub fn with_entering_hook(mut self, hook: Hook<Env>) -> Self {
        self.entering_hook = Some(hook);
        self
    }

    /// Set an already shared leaving hook.
    pub fn with_leaving_hook(mut self, hook: Hook<Env>) -> Self {
        self.leaving_hook = Some(hook);
        self
    }

    /// Wrap the state in a shared handle.
    pub fn into_ref(self) -> StateRef<L, Env> {
        Arc::new(self)
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn entering_hook(&self) -> Option<&Hook<Env>> {
        self.entering_hook.as_ref()
    }

    pub fn leaving_hook(&self) -> Option<&Hook<Env>> {
        self.leaving_hook.as_ref()
    }
}

impl<L: PartialEq, Env> State<L, Env> {
    /// Compare every field: label, terminal flag and hook identities.
    pub fn structurally_eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.is_final == other.is_final
            && same_hook(&self.entering_hook, &other.entering_hook)
            && same_hook(&self.leaving_hook, &other.leaving_hook)
    }
}

fn same_hook<Env>(a: &Option<Hook<Env>>, b: &Option<Hook<Env>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

impl<L: Debug, Env> Debug for State<L, Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("label", &self.label)
            .field("is_final", &self.is_final)
            .field("entering_hook", &self.entering_hook.is_some())
            .field("leaving_hook", &self.leaving_hook.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillwater::prelude::*;

    fn noop() -> BoxedEffect<(), AutomataError, ()> {
        pure(()).boxed()
    }

    #[test]
    fn new_state_is_plain() {
        let state = State::<u32, ()>::new(0);

        assert_eq!(*state.label(), 0);
        assert!(!state.is_final());
        assert!(state.entering_hook().is_none());
        assert!(state.leaving_hook().is_none());
    }

    #[test]
    fn terminal_marks_final() {
        let state = State::<u32, ()>::new(3).terminal();
        assert!(state.is_final());
    }

    #[test]
    fn hooks_are_stored() {
        let state = State::<u32, ()>::new(0).on_enter(noop).on_leave(noop);

        assert!(state.entering_hook().is_some());
        assert!(state.leaving_hook().is_some());
    }

    #[test]
    fn identity_distinguishes_equal_looking_states() {
        let a = State::<u32, ()>::new(0).into_ref();
        let b = State::<u32, ()>::new(0).into_ref();

        assert!(MatchMode::Identity.matches(&a, &a));
        assert!(!MatchMode::Identity.matches(&a, &b));
    }

    #[test]
    fn structural_compares_label_and_flag() {
        let a = State::<u32, ()>::new(0).into_ref();
        let b = State::<u32, ()>::new(0).into_ref();
        let c = State::<u32, ()>::new(1).into_ref();
        let d = State::<u32, ()>::new(0).terminal().into_ref();

        assert!(MatchMode::Structural.matches(&a, &b));
        assert!(!MatchMode::Structural.matches(&a, &c));
        assert!(!MatchMode::Structural.matches(&a, &d));
    }

    #[test]
    fn structural_compares_hook_identity() {
        let shared: Hook<()> = Arc::new(noop);
        let a = State::<u32, ()>::new(0)
            .with_entering_hook(Arc::clone(&shared))
            .into_ref();
        let b = State::<u32, ()>::new(0)
            .with_entering_hook(Arc::clone(&shared))
            .into_ref();
        let c = State::<u32, ()>::new(0).on_enter(noop).into_ref();
        let d = State::<u32, ()>::new(0).into_ref();

        assert!(MatchMode::Structural.matches(&a, &b));
        assert!(!MatchMode::Structural.matches(&a, &c));
        assert!(!MatchMode::Structural.matches(&a, &d));
    }

    #[test]
    fn default_mode_is_identity() {
        assert_eq!(MatchMode::default(), MatchMode::Identity);
    }

    #[test]
    fn debug_hides_hook_bodies() {
        let state = State::<u32, ()>::new(7).on_leave(noop);
        let rendered = format!("{:?}", state);

        assert!(rendered.contains("label: 7"));
        assert!(rendered.contains("leaving_hook: true"));
        assert!(rendered.contains("entering_hook: false"));
    }
}
