//! Drives a twelve-state chain that spells "Hello World" through its
//! transition actions.

use automata::builder::AutomataBuilder;
use automata::core::{Guard, State, StateRef};
use automata::effects::{Action, Automata, AutomataError, Transition};
use automata::StepHistory;
use std::io;
use std::sync::{Arc, Mutex};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

#[derive(Clone, Default)]
struct Printer {
    output: Arc<Mutex<String>>,
    closed: bool,
}

impl Printer {
    fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }

    fn print(&self, ch: char) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "printer closed"));
        }
        self.output.lock().unwrap().push(ch);
        Ok(())
    }

    fn text(&self) -> String {
        self.output.lock().unwrap().clone()
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

fn print_label(args: &[u32]) -> BoxedEffect<(), AutomataError, Printer> {
    let printed = args.first().copied().and_then(glyph);
    from_fn(move |printer: &Printer| {
        if let Some(ch) = printed {
            printer
                .print(ch)
                .map_err(|e| AutomataError::ActionFailed(e.to_string()))?;
        }
        Ok(())
    })
    .boxed()
}

fn hello_printer() -> (Automata<u32, u32, u32, Printer>, Vec<StateRef<u32, Printer>>) {
    let states: Vec<StateRef<u32, Printer>> = (0..=11)
        .map(|label| {
            let state = State::new(label);
            (if label == 11 { state.terminal() } else { state }).into_ref()
        })
        .collect();

    let print: Action<u32, Printer> = Arc::new(print_label);
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

    let machine = AutomataBuilder::new()
        .initial(&states[0])
        .states(&states)
        .transitions(transitions)
        .build()
        .unwrap();
    (machine, states)
}

#[tokio::test]
async fn prints_hello_world() {
    let (mut machine, states) = hello_printer();
    let printer = Printer::default();

    let mut next = 1;
    while !machine.done() {
        let label = *machine.current_state().label();
        let stepped = machine
            .step(&[next, label], Some(&[label][..]), &printer)
            .await
            .unwrap();
        assert!(stepped, "step {next} did not fire");
        next += 1;
    }

    assert_eq!(printer.text(), "Hello World");
    assert!(Arc::ptr_eq(machine.current_state(), &states[11]));
    let history: &StepHistory<u32> = machine.history();
    assert_eq!(
        history.get_path(),
        (0..=11).collect::<Vec<u32>>().iter().collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn out_of_sequence_event_is_ignored() {
    let (mut machine, states) = hello_printer();
    let printer = Printer::default();

    let stepped = machine.step(&[5, 0], Some(&[0][..]), &printer).await.unwrap();

    assert!(!stepped);
    assert!(Arc::ptr_eq(machine.current_state(), &states[0]));
    assert!(printer.text().is_empty());
}

#[tokio::test]
async fn write_failure_surfaces_as_action_error() {
    let (mut machine, states) = hello_printer();
    let printer = Printer::closed();

    let result = machine.step(&[1, 0], Some(&[0][..]), &printer).await;

    assert!(matches!(result, Err(AutomataError::ActionFailed(_))));
    assert!(Arc::ptr_eq(machine.current_state(), &states[0]));
    assert!(machine.history().is_empty());
    assert!(printer.text().is_empty());
}
