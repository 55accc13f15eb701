//! Callback abstractions accepted by the enumerator.

use std::ops::ControlFlow;

/// Task performed once per element of an enumeration.
///
/// Any `FnMut(item, index)` is an `Iteration`, so a closure is the usual way
/// to supply one:
///
/// ```
/// let mut seen = Vec::new();
/// enumerate::over(["a", "b"], |item, i| seen.push((i, item)));
/// assert_eq!(seen, vec![(0, "a"), (1, "b")]);
/// ```
///
/// The trait exists so callers can name the callback type, e.g. to store a
/// task behind `&mut dyn Iteration<T>` and hand it to [`over`](crate::over).
pub trait Iteration<T>: FnMut(T, usize) {}

impl<T, F> Iteration<T> for F where F: FnMut(T, usize) + ?Sized {}

/// Return value of an early-exit callback (see [`over_while`](crate::over_while)).
pub trait Flow {
    /// Whether traversal should move on to the next element.
    fn proceed(self) -> bool;
}

impl Flow for bool {
    #[inline]
    fn proceed(self) -> bool {
        self
    }
}

impl<B> Flow for ControlFlow<B> {
    #[inline]
    fn proceed(self) -> bool {
        self.is_continue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_twice(task: &mut dyn Iteration<usize>) {
        task(3, 2);
        task(1, 5);
    }

    #[test]
    fn test_closure_behind_trait_object() {
        let mut total = 0;
        run_twice(&mut |item: usize, i: usize| total += item * i);
        assert_eq!(total, 11);
    }

    #[test]
    fn test_trait_object_passed_to_over() {
        let mut seen = Vec::new();
        let mut record = |item: char, i: usize| seen.push((i, item));
        let task: &mut dyn Iteration<char> = &mut record;
        crate::over(['x', 'y'], task);
        assert_eq!(seen, vec![(0, 'x'), (1, 'y')]);
    }

    #[test]
    fn test_flow_values() {
        assert!(true.proceed());
        assert!(!false.proceed());
        assert!(ControlFlow::<()>::Continue(()).proceed());
        assert!(!ControlFlow::Break("done").proceed());
    }
}
