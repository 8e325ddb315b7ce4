//! Comparison predicates
//!
//! Generic factories building predicates from `PartialEq` and `PartialOrd`
//! comparisons against a fixed threshold.

use crate::combinator::Predicate;

/// Predicate for inequality against a fixed value. Built by [`ne`].
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Ne<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value != self.0
    }
}

/// Create a predicate that checks the tested value differs from `value`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(ne(10).test(&7));
/// assert!(!ne(10).test(&10));
/// ```
pub fn ne<T: PartialEq + Send + Sync>(value: T) -> Ne<T> {
    Ne(value)
}

/// Strictly-greater-than predicate. Built by [`gt`].
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks the tested value is greater than `value`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(gt(5).test(&12));
/// assert!(!gt(5).test(&5));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Greater-than-or-equal predicate. Built by [`ge`].
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks the tested value is at least `value`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(ge(5).test(&5));
/// assert!(!ge(5).test(&4));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(value: T) -> Ge<T> {
    Ge(value)
}

/// Strictly-less-than predicate. Built by [`lt`].
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Create a predicate that checks the tested value is less than `value`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(lt(5).test(&4));
/// assert!(!lt(5).test(&5));
/// ```
pub fn lt<T: PartialOrd + Send + Sync>(value: T) -> Lt<T> {
    Lt(value)
}

/// Less-than-or-equal predicate. Built by [`le`].
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks the tested value is at most `value`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(le(5).test(&5));
/// assert!(!le(5).test(&6));
/// ```
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Inclusive range predicate. Built by [`between`].
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks the tested value lies in `[min, max]`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let squad_number = between(1, 99);
/// assert!(squad_number.test(&10));
/// assert!(!squad_number.test(&0));
/// assert!(!squad_number.test(&100));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{is_equal, PredicateExt};

    #[test]
    fn comparisons_against_threshold() {
        assert!(gt(5).test(&6));
        assert!(!gt(5).test(&5));
        assert!(ge(5).test(&5));
        assert!(lt(5).test(&4));
        assert!(le(5).test(&5));
        assert!(ne(5).test(&4));
        assert!(!ne(5).test(&5));
    }

    #[test]
    fn between_is_inclusive() {
        let p = between(1, 99);
        assert!(p.test(&1));
        assert!(p.test(&99));
        assert!(!p.test(&0));
        assert!(!p.test(&100));
    }

    #[test]
    fn ne_is_complement_of_is_equal() {
        for x in [-3, 0, 5, 42] {
            assert_eq!(ne(5).test(&x), is_equal(5).negate().test(&x));
        }
    }

    #[test]
    fn works_on_non_numeric_ordered_types() {
        assert!(gt(String::from("Camavinga")).test(&String::from("Cocu")));
        assert!(lt("Cocu").test(&"Camavinga"));
    }
}
