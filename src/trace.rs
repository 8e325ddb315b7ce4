//! Tracing support for predicate evaluation.
//!
//! Provides the `Traced` combinator and the `traced` method for emitting
//! a `tracing` event on every evaluation. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use crate::combinator::Predicate;

/// A predicate that reports each evaluation through `tracing`.
///
/// Created by [`PredicateTracingExt::traced`].
#[derive(Clone, Debug)]
pub struct Traced<P> {
    inner: P,
    name: &'static str,
}

impl<T, P> Predicate<T> for Traced<P>
where
    T: std::fmt::Debug + ?Sized,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        let outcome = self.inner.test(value);
        tracing::trace!(predicate = self.name, ?value, outcome);
        outcome
    }
}

/// Extension trait for adding tracing to predicates.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait PredicateTracingExt<T: ?Sized>: Predicate<T> + Sized {
    /// Wrap this predicate so each evaluation emits a trace event
    /// carrying `name`, the tested value, and the outcome.
    ///
    /// ```rust
    /// use riddle::prelude::*;
    /// use riddle::trace::PredicateTracingExt;
    ///
    /// let p = starts_with("C").traced("starts_with_c");
    /// assert!(p.test("Cristiano"));
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateTracingExt<T> for P {}
