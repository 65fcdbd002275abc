//! Record of the transitions an automaton has taken.
//!
//! `record` returns a new history with the step appended and leaves the
//! original untouched. The machine itself appends in place.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// One completed state swap.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord<L> {
    /// Label of the state that was left
    pub from: L,
    /// Label of the state that was entered
    pub to: L,
    /// Index of the fired transition in declaration order
    pub transition: usize,
    /// When the swap happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of completed steps.
///
/// # Example
///
/// ```rust
/// use automata::core::{StepHistory, StepRecord};
/// use chrono::Utc;
///
/// let history = StepHistory::new()
///     .record(StepRecord { from: 'a', to: 'b', transition: 0, timestamp: Utc::now() })
///     .record(StepRecord { from: 'b', to: 'c', transition: 1, timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![&'a', &'b', &'c']);
/// ```
#[derive(Clone, Debug)]
pub struct StepHistory<L> {
    records: Vec<StepRecord<L>>,
}

impl<L> Default for StepHistory<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> StepHistory<L> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All recorded steps in order.
    pub fn transitions(&self) -> &[StepRecord<L>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Labels traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&L> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        path.extend(self.records.iter().map(|record| &record.to));
        path
    }

    /// Time between the first and last recorded step.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .unwrap_or(Duration::ZERO),
        )
    }

    /// Append a record in place.
    pub(crate) fn push(&mut self, record: StepRecord<L>) {
        self.records.push(record);
    }

    /// Drop every recorded step.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<L: Clone> StepHistory<L> {
    /// Return a new history with `record` appended.
    pub fn record(&self, record: StepRecord<L>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }
}
