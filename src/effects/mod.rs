//! Effectful side of the automaton, built on Stillwater 0.11.0.
//!
//! Everything that may suspend lives here: state hooks, transition
//! actions, the stepping engine and the delay used by
//! `step_after_timeout`.
//!
//! # Key Concepts
//!
//! - **Callbacks**: Hooks and actions are factories returning a fresh
//!   `BoxedEffect` on each call
//! - **Automata**: Runs guard, leaving hook, action and entering hook
//!   strictly in sequence, each awaited to completion
//! - **Environment**: Every effect runs against the `&Env` passed to `step`

mod callback;
mod delay;
mod error;
mod machine;
mod transition;

pub use callback::{Action, Hook};
pub use delay::{Delay, TokioDelay};
pub use error::AutomataError;
pub use machine::Automata;
pub use transition::Transition;
