//! Automata: an embeddable finite-state-machine engine
//!
//! A machine is a set of states, an initial state and an ordered list of
//! guarded transitions. The caller drives it one step at a time by handing
//! in event arguments; the engine picks the first applicable transition
//! and runs the caller's side effects in a fixed order.
//!
//! # Core Concepts
//!
//! - **State**: Labeled node with optional entering/leaving hooks and a
//!   terminal flag
//! - **Transition**: Edge between two states, guarded by a predicate over
//!   the event arguments, with an optional action
//! - **Automata**: Holds the current state and runs
//!   leaving hook → action → state swap → entering hook
//!
//! Hooks, actions and guards are Stillwater effects run against a
//! caller-supplied environment.
//!
//! # Example
//!
//! ```rust
//! use automata::builder::{guarded_transition, AutomataBuilder};
//! use automata::core::State;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let off = State::<&str, ()>::new("off").into_ref();
//! let on = State::<&str, ()>::new("on").terminal().into_ref();
//!
//! let mut switch = AutomataBuilder::<&str, bool, (), ()>::new()
//!     .initial(&off)
//!     .states([&off, &on])
//!     .add_transition(guarded_transition(&off, &on, |args: &[bool]| args == [true]))
//!     .build()
//!     .unwrap();
//!
//! assert!(!switch.step(&[false], None, &()).await.unwrap());
//! assert!(switch.step(&[true], None, &()).await.unwrap());
//! assert!(switch.done());
//! # });
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::{AutomataBuilder, BuildError, TransitionBuilder};
pub use crate::core::{Guard, MatchMode, State, StateRef, StepHistory, StepRecord};
pub use crate::effects::{Action, Automata, AutomataError, Delay, Hook, TokioDelay, Transition};
