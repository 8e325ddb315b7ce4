//! Core predicate trait and logical combinators
//!
//! This module provides the foundational [`Predicate`] trait, the
//! [`PredicateExt`] composition methods, and the [`is_equal`] factory.

/// A composable boolean test over values of type `T`.
///
/// A predicate is stateless and side-effect-free: calling [`test`](Predicate::test)
/// with the same value always returns the same answer. Any closure or `fn`
/// item of shape `Fn(&T) -> bool` is already a predicate via the blanket
/// impl, so the three construction styles are interchangeable:
///
/// ```rust
/// use riddle::prelude::*;
///
/// // A named type implementing the trait
/// struct StartsWithM;
/// impl Predicate<str> for StartsWithM {
///     fn test(&self, value: &str) -> bool {
///         value.starts_with('M')
///     }
/// }
///
/// // A closure
/// let starts_with_m = |s: &str| s.starts_with('M');
///
/// // A reference to an existing function
/// let empty: fn(&str) -> bool = str::is_empty;
///
/// assert!(StartsWithM.test("Messi"));
/// assert!(starts_with_m.test("Messi"));
/// assert!(empty.test(""));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Evaluate this predicate against a value.
    fn test(&self, value: &T) -> bool;
}

// Blanket impl for closures and fn items
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait providing logical composition of predicates.
///
/// Every method takes the receiver by value and returns a new concrete
/// combinator type; the operands are never mutated. `And` and `Or`
/// short-circuit exactly like `&&` and `||`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let m_and_long = starts_with("M").and(len_gt(5));
/// assert!(m_and_long.test("Messi Lionel"));
/// assert!(!m_and_long.test("Messi"));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Short-circuiting logical AND.
    ///
    /// The returned predicate evaluates the receiver first; when it is
    /// false, `other` is not evaluated.
    ///
    /// ```rust
    /// use riddle::prelude::*;
    ///
    /// let p = starts_with("C").and(len_min(5));
    /// assert!(p.test("Cristiano"));
    /// assert!(!p.test("Cocu"));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Short-circuiting logical OR.
    ///
    /// The returned predicate evaluates the receiver first; when it is
    /// true, `other` is not evaluated.
    ///
    /// ```rust
    /// use riddle::prelude::*;
    ///
    /// let p = starts_with("M").or(starts_with("C"));
    /// assert!(p.test("Cristiano Ronaldo"));
    /// assert!(!p.test("David Beckham"));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Logical complement.
    ///
    /// The returned predicate is true exactly when the receiver is false.
    ///
    /// ```rust
    /// use riddle::prelude::*;
    ///
    /// let p = starts_with("M").negate();
    /// assert!(p.test("Cristiano Ronaldo"));
    /// assert!(!p.test("Messi"));
    /// ```
    fn negate(self) -> Negate<Self> {
        Negate(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Short-circuiting AND of two predicates. Built by [`PredicateExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }
}

/// Short-circuiting OR of two predicates. Built by [`PredicateExt::or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }
}

/// Complement of a predicate. Built by [`PredicateExt::negate`].
#[derive(Clone, Copy, Debug)]
pub struct Negate<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Negate<P> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}

/// Predicate comparing against a fixed reference value. Built by [`is_equal`].
#[derive(Clone, Copy, Debug)]
pub struct IsEqual<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for IsEqual<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that is true iff the tested value equals `reference`.
///
/// This is a free-function factory, not a method on an existing predicate.
/// Equality is `PartialEq`; an absent reference is modelled with `Option`,
/// where `None` matches only a tested `None`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(is_equal(String::from("Messi")).test(&String::from("Messi")));
/// assert!(!is_equal(String::from("Messi")).test(&String::from("Pele")));
///
/// let absent: Option<String> = None;
/// assert!(is_equal(absent.clone()).test(&None));
/// assert!(!is_equal(absent).test(&Some(String::from("Messi"))));
/// ```
pub fn is_equal<T>(reference: T) -> IsEqual<T> {
    IsEqual(reference)
}
