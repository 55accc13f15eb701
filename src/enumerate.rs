//! Indexed traversal of a sequence.
//!
//! Every entry point funnels into `Enumerator::traverse`, which owns the
//! index counter: indices start at the configured offset (0 unless set) and
//! grow by exactly one per element, in the sequence's own iteration order.

use std::convert::Infallible;
use std::ops::ControlFlow;

use tracing::{trace, trace_span};

use crate::error::EnumerateError;
use crate::iteration::Flow;

/// Call `task` once for every element of `sequence`, passing the element and
/// its zero-based position.
///
/// Works on anything that can be iterated: vectors, arrays, slices, maps,
/// ranges, iterator chains. An empty sequence makes no calls.
///
/// ```
/// let mut lines = Vec::new();
/// enumerate::over(vec!["First", "Second"], |item, i| {
///     lines.push(format!("{i}: {item}"));
/// });
/// assert_eq!(lines, ["0: First", "1: Second"]);
/// ```
///
/// `task` is any [`Iteration`](crate::Iteration). A panic raised by `task`
/// propagates to the caller and no further elements are visited.
pub fn over<I, F>(sequence: I, task: F)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    Enumerator::new().over(sequence, task)
}

/// Like [`over`], but `task` is fallible.
///
/// Traversal stops at the first error, which is returned together with the
/// index it occurred at. On success, returns the number of elements visited.
pub fn try_over<I, F, E>(sequence: I, task: F) -> Result<usize, EnumerateError<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Result<(), E>,
{
    Enumerator::new().try_over(sequence, task)
}

/// Like [`over`], but `task` decides whether to continue.
///
/// `task` returns a `bool` or a [`ControlFlow`]; traversal stops right after
/// the first call returning `false` / `Break`. Returns the number of times
/// `task` was called.
pub fn over_while<I, F, R>(sequence: I, task: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> R,
    R: Flow,
{
    Enumerator::new().over_while(sequence, task)
}

/// Enumeration settings.
///
/// The free functions use [`Enumerator::default`], which counts from 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Enumerator {
    /// Index handed to the first element.
    pub start: usize,
}

impl Enumerator {
    /// Enumerator counting from 0.
    pub const fn new() -> Self {
        Self { start: 0 }
    }

    /// Count from `start` instead of 0.
    pub const fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// See [`over`].
    ///
    /// # Panics
    ///
    /// Panics if the start offset makes an index overflow `usize`, and
    /// propagates any panic raised by `task`.
    pub fn over<I, F>(&self, sequence: I, mut task: F)
    where
        I: IntoIterator,
        F: FnMut(I::Item, usize),
    {
        let outcome = self.traverse(sequence, |item, index| {
            task(item, index);
            ControlFlow::<Infallible>::Continue(())
        });
        match outcome {
            Ok(_) => {}
            Err(EnumerateError::Task { source, .. }) => match source {},
            Err(overflow) => panic!("{overflow}"),
        }
    }

    /// See [`try_over`].
    pub fn try_over<I, F, E>(&self, sequence: I, mut task: F) -> Result<usize, EnumerateError<E>>
    where
        I: IntoIterator,
        F: FnMut(I::Item, usize) -> Result<(), E>,
    {
        self.traverse(sequence, |item, index| match task(item, index) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => ControlFlow::Break(err),
        })
    }

    /// See [`over_while`].
    ///
    /// # Panics
    ///
    /// Panics if the start offset makes an index overflow `usize`.
    pub fn over_while<I, F, R>(&self, sequence: I, mut task: F) -> usize
    where
        I: IntoIterator,
        F: FnMut(I::Item, usize) -> R,
        R: Flow,
    {
        let outcome = self.traverse(sequence, |item, index| {
            if task(item, index).proceed() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });
        match outcome {
            Ok(visited) => visited,
            Err(EnumerateError::Task { index, .. }) => index - self.start + 1,
            Err(overflow) => panic!("{overflow}"),
        }
    }

    /// Single pass over `sequence`, stopping at the first `Break`.
    ///
    /// Returns the number of elements visited.
    fn traverse<I, B>(
        &self,
        sequence: I,
        mut step: impl FnMut(I::Item, usize) -> ControlFlow<B>,
    ) -> Result<usize, EnumerateError<B>>
    where
        I: IntoIterator,
    {
        let _span = trace_span!("enumerate", start = self.start).entered();

        // `None` once the counter has passed usize::MAX.
        let mut next = Some(self.start);
        for item in sequence {
            let index = next.ok_or(EnumerateError::IndexOverflow { start: self.start })?;
            if let ControlFlow::Break(source) = step(item, index) {
                trace!(index, "enumeration stopped early");
                return Err(EnumerateError::Task { index, source });
            }
            next = index.checked_add(1);
        }

        let visited = match next {
            Some(end) => end - self.start,
            None => (usize::MAX - self.start).saturating_add(1),
        };
        trace!(visited, "enumeration complete");
        Ok(visited)
    }
}
