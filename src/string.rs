//! String predicates
//!
//! Ready-made predicates over `str`. The sequence operations bridge
//! element types through `Borrow<str>`, so these also apply to sequences
//! of `String` or `&str` without adapters.

use crate::combinator::{Negate, Predicate};

/// Predicate that checks if a string starts with a prefix. Built by [`starts_with`].
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn test(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string starts with `prefix`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(starts_with("Cris").test("Cristiano"));
/// assert!(!starts_with("Cris").test("Messi"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if a string ends with a suffix. Built by [`ends_with`].
#[derive(Clone, Debug)]
pub struct EndsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EndsWith<S> {
    #[inline]
    fn test(&self, value: &str) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string ends with `suffix`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(ends_with("inho").test("Ronaldinho"));
/// assert!(!ends_with("inho").test("Ronaldo"));
/// ```
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate that checks if a string contains a substring. Built by [`contains_str`].
#[derive(Clone, Debug)]
pub struct ContainsStr<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for ContainsStr<S> {
    #[inline]
    fn test(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

/// Create a predicate that checks if a string contains `substring`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(contains_str(" ").test("Lionel Messi"));
/// assert!(!contains_str(" ").test("Cristiano"));
/// ```
pub fn contains_str<S: AsRef<str> + Send + Sync>(substring: S) -> ContainsStr<S> {
    ContainsStr(substring)
}

/// Predicate that checks if a string is empty. Built by [`is_empty`].
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl Predicate<str> for IsEmpty {
    #[inline]
    fn test(&self, value: &str) -> bool {
        value.is_empty()
    }
}

/// Create a predicate that checks if a string is empty.
///
/// The same check is available as a plain function reference, since
/// `str::is_empty` already has the predicate shape:
///
/// ```rust
/// use riddle::prelude::*;
///
/// let by_factory = is_empty();
/// let by_fn: fn(&str) -> bool = str::is_empty;
/// assert!(by_factory.test(""));
/// assert!(by_fn.test(""));
/// assert!(!by_factory.test("Messi"));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Create a predicate that checks if a string is not empty.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(not_empty().test("Messi"));
/// assert!(!not_empty().test(""));
/// ```
pub fn not_empty() -> Negate<IsEmpty> {
    Negate(IsEmpty)
}

/// Predicate on string length in bytes. Built by the `len_*` factories.
#[derive(Clone, Copy, Debug)]
pub struct LenInRange {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenInRange {
    #[inline]
    fn test(&self, value: &str) -> bool {
        let len = value.len();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if string length is between `min` and
/// `max`, inclusive.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let p = len_between(4, 9);
/// assert!(p.test("Cocu"));
/// assert!(p.test("Cristiano"));
/// assert!(!p.test("Xavi Hernandez"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenInRange {
    LenInRange { min, max }
}

/// Create a predicate that checks if string length is strictly greater
/// than `n`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(len_gt(5).test("Messi Lionel"));
/// assert!(!len_gt(5).test("Messi"));
/// ```
pub fn len_gt(n: usize) -> LenInRange {
    LenInRange {
        min: n + 1,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at least `min`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(len_min(5).test("Messi"));
/// assert!(!len_min(5).test("Pele"));
/// ```
pub fn len_min(min: usize) -> LenInRange {
    LenInRange {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most `max`.
///
/// ```rust
/// use riddle::prelude::*;
///
/// assert!(len_max(5).test("Messi"));
/// assert!(!len_max(5).test("Cristiano"));
/// ```
pub fn len_max(max: usize) -> LenInRange {
    LenInRange { min: 0, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::PredicateExt;

    #[test]
    fn starts_with_prefix() {
        assert!(starts_with("C").test("Cristiano"));
        assert!(starts_with("C").test(String::from("Carlitos Tevez").as_str()));
        assert!(!starts_with("C").test("David Beckham"));
    }

    #[test]
    fn ends_with_suffix() {
        assert!(ends_with("Messi").test("Lionel Messi"));
        assert!(!ends_with("Messi").test("Lionel"));
    }

    #[test]
    fn contains_substring() {
        assert!(contains_str("nel").test("Lionel Messi"));
        assert!(!contains_str("nel").test("Cristiano"));
    }

    #[test]
    fn empty_and_not_empty() {
        assert!(is_empty().test(""));
        assert!(!is_empty().test("Messi"));
        assert!(not_empty().test("Messi"));
        assert!(!not_empty().test(""));
    }

    #[test]
    fn length_boundaries() {
        assert!(len_gt(5).test("Cristiano"));
        assert!(!len_gt(5).test("Messi")); // exactly 5 is not greater
        assert!(len_min(5).test("Messi"));
        assert!(len_max(4).test("Cocu"));
        assert!(!len_max(4).test("Messi"));
        let p = len_between(4, 9);
        assert!(p.test("Cocu")); // exactly min
        assert!(p.test("Cristiano")); // exactly max
        assert!(!p.test("Rui"));
    }

    #[test]
    fn composes_with_combinators() {
        let short_c_name = starts_with("C").and(len_max(4));
        assert!(short_c_name.test("Cocu"));
        assert!(!short_c_name.test("Cristiano"));
        assert!(!short_c_name.test("Pele"));
    }
}
