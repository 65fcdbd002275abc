//! Data model of the automaton.
//!
//! This module contains the values the engine reads but never mutates:
//! - States and the `MatchMode` used to compare them
//! - Guard predicates over event arguments
//! - Immutable step history

mod guard;
mod history;
mod state;

pub use guard::{Guard, GuardFn};
pub use history::{StepHistory, StepRecord};
pub use state::{MatchMode, State, StateRef};
