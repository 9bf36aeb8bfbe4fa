//! Fire-and-forget visualization hooks.
//!
//! The sorting core only ever talks to a `&mut dyn Highlighter`. Tests substitute a
//! [`Recorder`], headless callers pass [`NoHighlight`].

use serde::Serialize;

use crate::error::HighlightError;

/// Marker used for the pivot when the config doesn't name another one.
pub const PIVOT_MARKER: &str = "#87a832";

/// Observer notified while partitions are processed.
///
/// Errors returned here never abort a sort. They are logged and counted, the sequence is sorted
/// either way.
pub trait Highlighter {
    /// The element at `index` of the sequence is of interest, drawn with `marker`.
    fn highlight(&mut self, index: usize, marker: &str) -> Result<(), HighlightError>;

    /// The previous highlight on `sequence` is no longer needed.
    fn clear_highlight(&mut self, sequence: &[i32]) -> Result<(), HighlightError>;

    /// The elements at `a` and `b` are compared.
    fn compare(&mut self, _a: usize, _b: usize) -> Result<(), HighlightError> {
        Ok(())
    }

    /// The elements at `a` and `b` are swapped, `a == b` included.
    fn swap(&mut self, _a: usize, _b: usize) -> Result<(), HighlightError> {
        Ok(())
    }

    /// The pivot reached `index`, its final sorted position.
    fn placed(&mut self, _index: usize) -> Result<(), HighlightError> {
        Ok(())
    }
}

impl<H: Highlighter + ?Sized> Highlighter for &mut H {
    fn highlight(&mut self, index: usize, marker: &str) -> Result<(), HighlightError> {
        (**self).highlight(index, marker)
    }

    fn clear_highlight(&mut self, sequence: &[i32]) -> Result<(), HighlightError> {
        (**self).clear_highlight(sequence)
    }

    fn compare(&mut self, a: usize, b: usize) -> Result<(), HighlightError> {
        (**self).compare(a, b)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), HighlightError> {
        (**self).swap(a, b)
    }

    fn placed(&mut self, index: usize) -> Result<(), HighlightError> {
        (**self).placed(index)
    }
}

/// Discards every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHighlight;

impl Highlighter for NoHighlight {
    fn highlight(&mut self, _index: usize, _marker: &str) -> Result<(), HighlightError> {
        Ok(())
    }

    fn clear_highlight(&mut self, _sequence: &[i32]) -> Result<(), HighlightError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HighlightEvent {
    Highlight { index: usize, marker: String },
    Clear,
}

/// Element level operation inside a partition, what a visualizer animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Compare { a: usize, b: usize },
    Swap { a: usize, b: usize },
    Placed { index: usize },
}

impl Step {
    /// Applies a recorded swap to `v`, other steps leave it alone.
    pub fn replay(&self, v: &mut [i32]) {
        if let Step::Swap { a, b } = *self {
            v.swap(a, b);
        }
    }
}

/// Keeps every signal in call order.
///
/// Highlight and clear calls go to [`Recorder::events`], the finer grained compare, swap and placed
/// calls to [`Recorder::steps`].
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    events: Vec<HighlightEvent>,
    steps: Vec<Step>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[HighlightEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<HighlightEvent> {
        self.events
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Indices passed to `highlight`, in call order.
    pub fn highlighted_indices(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HighlightEvent::Highlight { index, .. } => Some(*index),
                HighlightEvent::Clear => None,
            })
            .collect()
    }
}

impl Highlighter for Recorder {
    fn highlight(&mut self, index: usize, marker: &str) -> Result<(), HighlightError> {
        self.events.push(HighlightEvent::Highlight {
            index,
            marker: marker.to_owned(),
        });
        Ok(())
    }

    fn clear_highlight(&mut self, _sequence: &[i32]) -> Result<(), HighlightError> {
        self.events.push(HighlightEvent::Clear);
        Ok(())
    }

    fn compare(&mut self, a: usize, b: usize) -> Result<(), HighlightError> {
        self.steps.push(Step::Compare { a, b });
        Ok(())
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), HighlightError> {
        self.steps.push(Step::Swap { a, b });
        Ok(())
    }

    fn placed(&mut self, index: usize) -> Result<(), HighlightError> {
        self.steps.push(Step::Placed { index });
        Ok(())
    }
}

/// Engine side of the observer. Absorbs failures so a broken visualization can't reach the
/// sort.
pub(crate) struct Signal<'a> {
    observer: &'a mut dyn Highlighter,
    marker: &'a str,
    failures: u64,
}

impl<'a> Signal<'a> {
    pub(crate) fn new(observer: &'a mut dyn Highlighter, marker: &'a str) -> Self {
        Self {
            observer,
            marker,
            failures: 0,
        }
    }

    pub(crate) fn pivot(&mut self, index: usize) {
        if let Err(err) = self.observer.highlight(index, self.marker) {
            self.failures += 1;
            tracing::warn!(index, error = %err, "highlight failed, continuing sort");
        }
    }

    pub(crate) fn clear(&mut self, sequence: &[i32]) {
        if let Err(err) = self.observer.clear_highlight(sequence) {
            self.failures += 1;
            tracing::warn!(error = %err, "clear highlight failed, continuing sort");
        }
    }

    pub(crate) fn compare(&mut self, a: usize, b: usize) {
        let result = self.observer.compare(a, b);
        self.absorb(result, "compare");
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        let result = self.observer.swap(a, b);
        self.absorb(result, "swap");
    }

    pub(crate) fn placed(&mut self, index: usize) {
        let result = self.observer.placed(index);
        self.absorb(result, "placed");
    }

    fn absorb(&mut self, result: Result<(), HighlightError>, step: &'static str) {
        if let Err(err) = result {
            self.failures += 1;
            tracing::warn!(step, error = %err, "observer step failed, continuing sort");
        }
    }

    pub(crate) fn failures(&self) -> u64 {
        self.failures
    }
}
