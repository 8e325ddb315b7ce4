//! Two-argument predicates
//!
//! [`BiPredicate`] carries the same composable-boolean-test contract as
//! [`Predicate`](crate::combinator::Predicate), extended to two inputs.
//! It is defined entirely in this crate, showing that the abstraction
//! generalises to arbitrary arity without library support.

use crate::combinator::Predicate;

/// A composable boolean test over a pair of values.
///
/// Like its one-argument counterpart, any closure of the right shape is
/// already a `BiPredicate` via the blanket impl:
///
/// ```rust
/// use riddle::prelude::*;
///
/// let longer_than = |s: &String, n: &usize| s.len() > *n;
/// assert!(longer_than.test(&String::from("Lionel Messi"), &5));
/// assert!(!longer_than.test(&String::from("Cocu"), &5));
/// ```
pub trait BiPredicate<A: ?Sized, B: ?Sized>: Send + Sync {
    /// Evaluate this predicate against a pair of values.
    fn test(&self, first: &A, second: &B) -> bool;
}

// Blanket impl for closures and fn items
impl<A: ?Sized, B: ?Sized, F> BiPredicate<A, B> for F
where
    F: Fn(&A, &B) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, first: &A, second: &B) -> bool {
        self(first, second)
    }
}

/// Extension trait providing logical composition of two-argument
/// predicates, with the same semantics as the one-argument
/// [`PredicateExt`](crate::combinator::PredicateExt): new values are
/// returned, operands are untouched, and `and`/`or` short-circuit.
pub trait BiPredicateExt<A: ?Sized, B: ?Sized>: BiPredicate<A, B> + Sized {
    /// Short-circuiting logical AND over the same pair of inputs.
    fn and<P: BiPredicate<A, B>>(self, other: P) -> BiAnd<Self, P> {
        BiAnd(self, other)
    }

    /// Short-circuiting logical OR over the same pair of inputs.
    fn or<P: BiPredicate<A, B>>(self, other: P) -> BiOr<Self, P> {
        BiOr(self, other)
    }

    /// Logical complement for every pair of inputs.
    fn negate(self) -> BiNegate<Self> {
        BiNegate(self)
    }

    /// Fix the second argument, producing a one-argument [`Predicate`].
    ///
    /// ```rust
    /// use riddle::prelude::*;
    ///
    /// let longer_than = |s: &String, n: &usize| s.len() > *n;
    /// let longer_than_five = longer_than.bind_second(5);
    /// assert!(longer_than_five.test(&String::from("Lionel Messi")));
    /// ```
    fn bind_second(self, second: B) -> BindSecond<Self, B>
    where
        B: Sized,
    {
        BindSecond(self, second)
    }
}

impl<A: ?Sized, B: ?Sized, P: BiPredicate<A, B>> BiPredicateExt<A, B> for P {}

/// Short-circuiting AND of two bi-predicates. Built by [`BiPredicateExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct BiAnd<P1, P2>(pub P1, pub P2);

impl<A: ?Sized, B: ?Sized, P1, P2> BiPredicate<A, B> for BiAnd<P1, P2>
where
    P1: BiPredicate<A, B>,
    P2: BiPredicate<A, B>,
{
    #[inline]
    fn test(&self, first: &A, second: &B) -> bool {
        self.0.test(first, second) && self.1.test(first, second)
    }
}

/// Short-circuiting OR of two bi-predicates. Built by [`BiPredicateExt::or`].
#[derive(Clone, Copy, Debug)]
pub struct BiOr<P1, P2>(pub P1, pub P2);

impl<A: ?Sized, B: ?Sized, P1, P2> BiPredicate<A, B> for BiOr<P1, P2>
where
    P1: BiPredicate<A, B>,
    P2: BiPredicate<A, B>,
{
    #[inline]
    fn test(&self, first: &A, second: &B) -> bool {
        self.0.test(first, second) || self.1.test(first, second)
    }
}

/// Complement of a bi-predicate. Built by [`BiPredicateExt::negate`].
#[derive(Clone, Copy, Debug)]
pub struct BiNegate<P>(pub P);

impl<A: ?Sized, B: ?Sized, P: BiPredicate<A, B>> BiPredicate<A, B> for BiNegate<P> {
    #[inline]
    fn test(&self, first: &A, second: &B) -> bool {
        !self.0.test(first, second)
    }
}

/// A bi-predicate with its second argument fixed. Built by
/// [`BiPredicateExt::bind_second`].
#[derive(Clone, Copy, Debug)]
pub struct BindSecond<P, B>(pub P, pub B);

impl<A: ?Sized, B, P> Predicate<A> for BindSecond<P, B>
where
    B: Send + Sync,
    P: BiPredicate<A, B>,
{
    #[inline]
    fn test(&self, value: &A) -> bool {
        self.0.test(value, &self.1)
    }
}
