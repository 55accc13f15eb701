use thiserror::Error;

/// Errors that can end an enumeration early.
///
/// `E` is the error type produced by the caller's task.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnumerateError<E> {
    /// The task failed on the element at `index`; later elements were not visited.
    #[error("task failed at index {index}")]
    Task {
        /// Position of the element the task failed on.
        index: usize,
        /// Error returned by the task.
        source: E,
    },

    /// The configured start offset pushed the next index past `usize::MAX`.
    #[error("index overflow: enumeration starting at {start} ran past usize::MAX")]
    IndexOverflow {
        /// Start offset of the enumeration.
        start: usize,
    },
}

impl<E> EnumerateError<E> {
    /// Position at which the enumeration stopped, if a task failed.
    pub fn index(&self) -> Option<usize> {
        match self {
            EnumerateError::Task { index, .. } => Some(*index),
            EnumerateError::IndexOverflow { .. } => None,
        }
    }

    /// Consume the error and return the task's own error, if any.
    pub fn into_source(self) -> Option<E> {
        match self {
            EnumerateError::Task { source, .. } => Some(source),
            EnumerateError::IndexOverflow { .. } => None,
        }
    }
}
