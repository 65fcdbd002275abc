//! Guard predicates deciding whether a transition applies to an event.
//!
//! A guard receives the event arguments passed to `step` and produces a
//! boolean effect. Plain synchronous predicates are lifted with
//! [`Guard::new`]; guards that need the environment or must suspend are
//! built from an effect factory with [`Guard::effect`].

use crate::effects::AutomataError;
use std::sync::Arc;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

/// Factory producing a fresh guard effect for each evaluation.
pub type GuardFn<E, Env> =
    Arc<dyn Fn(&[E]) -> BoxedEffect<bool, AutomataError, Env> + Send + Sync>;

/// Predicate over event arguments.
///
/// # Example
///
/// ```rust
/// use automata::core::Guard;
///
/// // Accepts `(x, y)` when `x` is the successor of `y`.
/// let successor = Guard::<u32, ()>::new(|args: &[u32]| args.len() == 2 && args[0] == args[1] + 1);
/// let anything = Guard::<u32, ()>::always();
/// # let _ = (successor, anything);
/// ```
pub struct Guard<E, Env> {
    predicate: GuardFn<E, Env>,
}

impl<E: 'static, Env: Clone + Send + Sync + 'static> Guard<E, Env> {
    /// Create a guard from a synchronous predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&[E]) -> bool + Send + Sync + 'static,
    {
        Self::effect(move |args: &[E]| pure(predicate(args)).boxed())
    }

    /// Create a guard from an effect factory.
    ///
    /// The returned effect cannot borrow the arguments; copy out whatever
    /// it needs before building it.
    pub fn effect<F>(factory: F) -> Self
    where
        F: Fn(&[E]) -> BoxedEffect<bool, AutomataError, Env> + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(factory),
        }
    }

    /// Guard that accepts every event.
    pub fn always() -> Self {
        Self::new(|_: &[E]| true)
    }

    /// Evaluate the guard against the event arguments.
    ///
    /// Failures raised by the guard's effect are returned unchanged.
    pub async fn evaluate(&self, args: &[E], env: &Env) -> Result<bool, AutomataError> {
        (self.predicate)(args).run(env).await
    }
}

impl<E, Env> Clone for Guard<E, Env> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
