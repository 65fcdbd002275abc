//! Hello World Automaton
//!
//! This example spells "Hello World" by driving a chain of twelve states.
//!
//! Key concepts:
//! - Guards over event arguments: a transition fires when the first event
//!   argument is the successor of the second
//! - A single shared action that prints the character for the label it
//!   receives as its action argument
//! - An environment (`Console`) that the action's effect writes to
//! - A terminal state that ends the driving loop
//!
//! Run with: cargo run --example hello_world

use automata::builder::AutomataBuilder;
use automata::core::{Guard, State, StateRef};
use automata::effects::{Action, AutomataError, Transition};
use std::io::{self, Write};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

#[derive(Clone)]
struct Console;

impl Console {
    fn print(&self, ch: char) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{ch}")?;
        stdout.flush()
    }
}

fn glyph(label: u32) -> Option<char> {
    match label {
        0 => Some('H'),
        1 => Some('e'),
        2 | 3 | 9 => Some('l'),
        4 | 7 => Some('o'),
        5 => Some(' '),
        6 => Some('W'),
        8 => Some('r'),
        10 => Some('d'),
        _ => None,
    }
}

fn print_label(args: &[u32]) -> BoxedEffect<(), AutomataError, Console> {
    let printed = args.first().copied().and_then(glyph);
    from_fn(move |console: &Console| {
        if let Some(ch) = printed {
            console
                .print(ch)
                .map_err(|e| AutomataError::ActionFailed(e.to_string()))?;
        }
        Ok(())
    })
    .boxed()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Hello World Automaton ===\n");

    let states: Vec<StateRef<u32, Console>> = (0..=11)
        .map(|label| {
            let state = State::new(label);
            (if label == 11 { state.terminal() } else { state }).into_ref()
        })
        .collect();

    let print: Action<u32, Console> = Arc::new(print_label);
    let transitions = states
        .windows(2)
        .map(|pair| {
            Transition::new(
                Arc::clone(&pair[0]),
                Arc::clone(&pair[1]),
                Guard::new(|args: &[u32]| args.len() == 2 && args[0] == args[1] + 1),
            )
            .with_shared_action(Arc::clone(&print))
        })
        .collect();

    let mut printer = AutomataBuilder::new()
        .initial(&states[0])
        .states(&states)
        .transitions(transitions)
        .build()?;

    let console = Console;
    let mut next = 1;
    let mut stepped = true;
    while !printer.done() && stepped {
        let label = *printer.current_state().label();
        stepped = printer
            .step(&[next, label], Some(&[label][..]), &console)
            .await?;
        next += 1;
    }
    println!();

    println!("\nSteps taken: {}", printer.history().len());
    println!("Final state: {}", printer.current_state().label());
    println!("Done: {}", printer.done());

    println!("\n=== Example Complete ===");
    Ok(())
}
