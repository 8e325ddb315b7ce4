//! Sequence integration
//!
//! Operations that apply a [`Predicate`] across an ordered sequence:
//! in-place conditional removal, the three short-circuiting quantifiers,
//! and an order-preserving filter.
//!
//! Elements are bridged to the predicate's tested type through
//! [`Borrow`], so a `Predicate<str>` works over `Vec<String>` and
//! `Vec<&str>` alike:
//!
//! ```rust
//! use riddle::prelude::*;
//!
//! let owned = vec![String::from("Cristiano"), String::from("Messi")];
//! let borrowed = ["Cristiano", "Messi"];
//! assert!(any_match(&owned, &starts_with("M")));
//! assert!(any_match(&borrowed, &starts_with("M")));
//! ```

use crate::combinator::Predicate;
use std::borrow::Borrow;

/// Remove every element matching `predicate` from `items`, in place.
///
/// Runs in a single pass, preserves the relative order of retained
/// elements, and drops removed elements immediately.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let mut players = vec!["Cristiano", "David Beckham", "Lionel Messi", "Carlitos Tevez"];
/// remove_matching(&mut players, &starts_with("C"));
/// assert_eq!(players, ["David Beckham", "Lionel Messi"]);
/// ```
pub fn remove_matching<T, Q, P>(items: &mut Vec<T>, predicate: &P)
where
    T: Borrow<Q>,
    Q: ?Sized,
    P: Predicate<Q>,
{
    items.retain(|item| !predicate.test(item.borrow()));
}

/// Check whether every element of `items` matches `predicate`.
///
/// Evaluates in sequence order and stops at the first element that does
/// not match. Vacuously true for an empty sequence.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let players = ["Cristiano", "Camavinga", "Canavaro", "Cocu"];
/// assert!(all_match(&players, &starts_with("C")));
/// assert!(!all_match(&players, &len_gt(5)));
/// ```
pub fn all_match<T, Q, P>(items: &[T], predicate: &P) -> bool
where
    T: Borrow<Q>,
    Q: ?Sized,
    P: Predicate<Q>,
{
    items.iter().all(|item| predicate.test(item.borrow()))
}

/// Check whether at least one element of `items` matches `predicate`.
///
/// Evaluates in sequence order and stops at the first match. Vacuously
/// false for an empty sequence.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let players = ["Cristiano", "Messi"];
/// assert!(any_match(&players, &is_equal("Messi")));
/// assert!(!any_match(&players, &is_equal("Pele")));
/// ```
pub fn any_match<T, Q, P>(items: &[T], predicate: &P) -> bool
where
    T: Borrow<Q>,
    Q: ?Sized,
    P: Predicate<Q>,
{
    items.iter().any(|item| predicate.test(item.borrow()))
}

/// Check whether no element of `items` matches `predicate`.
///
/// Evaluates in sequence order and stops at the first match, returning
/// false. Vacuously true for an empty sequence.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let players = ["Cristiano", "Camavinga", "Canavaro", "Cocu"];
/// assert!(none_match(&players, &is_equal("Messi")));
/// ```
pub fn none_match<T, Q, P>(items: &[T], predicate: &P) -> bool
where
    T: Borrow<Q>,
    Q: ?Sized,
    P: Predicate<Q>,
{
    !items.iter().any(|item| predicate.test(item.borrow()))
}

/// Iterate the elements of `items` matching `predicate`, in order.
///
/// Evaluation is lazy; collect the iterator to materialize a new
/// sequence. The input is not modified.
///
/// ```rust
/// use riddle::prelude::*;
///
/// let players = ["Cristiano", "Camavinga", "Canavaro", "Cocu", "Messi"];
/// let not_messi = is_equal("Messi").negate();
/// let keepers: Vec<&&str> = filtered(&players, &not_messi).collect();
/// assert_eq!(keepers, [&"Cristiano", &"Camavinga", &"Canavaro", &"Cocu"]);
/// ```
pub fn filtered<'a, T, Q, P>(
    items: &'a [T],
    predicate: &'a P,
) -> impl Iterator<Item = &'a T> + 'a
where
    T: Borrow<Q>,
    Q: ?Sized,
    P: Predicate<Q>,
{
    items
        .iter()
        .filter(move |item| predicate.test((*item).borrow()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{is_equal, PredicateExt};
    use crate::string::starts_with;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn roster() -> Vec<String> {
        ["Cristiano", "David Beckham", "Lionel Messi", "Carlitos Tevez"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn remove_matching_keeps_order() {
        let mut players = roster();
        remove_matching(&mut players, &starts_with("C"));
        assert_eq!(players, ["David Beckham", "Lionel Messi"]);
    }

    #[test]
    fn remove_matching_can_clear_or_keep_everything() {
        let mut players = roster();
        remove_matching(&mut players, &|_: &String| false);
        assert_eq!(players.len(), 4);
        remove_matching(&mut players, &|_: &String| true);
        assert!(players.is_empty());
    }

    #[test]
    fn quantifiers_on_c_roster() {
        let players = ["Cristiano", "Camavinga", "Canavaro", "Cocu"];
        assert!(all_match(&players, &starts_with("C")));
        assert!(none_match(&players, &is_equal("Messi")));
        assert!(!any_match(&players, &is_equal("Messi")));
    }

    #[test]
    fn quantifiers_after_appending_messi() {
        let mut players = vec!["Cristiano", "Camavinga", "Canavaro", "Cocu"];
        players.push("Messi");
        assert!(any_match(&players, &is_equal("Messi")));
        assert!(!none_match(&players, &is_equal("Messi")));
        assert!(!all_match(&players, &starts_with("C")));
    }

    #[test]
    fn quantifiers_are_vacuous_on_empty_input() {
        let empty: [&str; 0] = [];
        assert!(all_match(&empty, &starts_with("C")));
        assert!(none_match(&empty, &is_equal("Messi")));
        assert!(!any_match(&empty, &is_equal("Messi")));
    }

    #[test]
    fn all_match_stops_at_first_false() {
        let calls = AtomicUsize::new(0);
        let counting = |s: &&str| {
            calls.fetch_add(1, Ordering::Relaxed);
            s.starts_with('C')
        };
        let players = ["Cristiano", "Messi", "Camavinga", "Cocu"];
        assert!(!all_match(&players, &counting));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn any_match_stops_at_first_true() {
        let calls = AtomicUsize::new(0);
        let counting = |s: &&str| {
            calls.fetch_add(1, Ordering::Relaxed);
            *s == "Messi"
        };
        let players = ["Cristiano", "Messi", "Camavinga", "Cocu"];
        assert!(any_match(&players, &counting));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn none_match_stops_at_first_true() {
        let calls = AtomicUsize::new(0);
        let counting = |s: &&str| {
            calls.fetch_add(1, Ordering::Relaxed);
            *s == "Messi"
        };
        let players = ["Messi", "Cristiano", "Camavinga"];
        assert!(!none_match(&players, &counting));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn filtered_preserves_order_and_input() {
        let mut players = vec!["Cristiano", "Camavinga", "Canavaro", "Cocu"];
        players.push("Messi");
        let without_messi = is_equal("Messi").negate();
        let kept: Vec<&str> = filtered(&players, &without_messi).copied().collect();
        assert_eq!(kept, ["Cristiano", "Camavinga", "Canavaro", "Cocu"]);
        // source sequence untouched
        assert_eq!(players.len(), 5);
    }

    #[test]
    fn filtered_is_lazy() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &&str| {
            calls.fetch_add(1, Ordering::Relaxed);
            true
        };
        let players = ["Cristiano", "Messi"];
        let iter = filtered(&players, &counting);
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert_eq!(iter.count(), 2);
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn owned_and_borrowed_elements_share_predicates() {
        let owned = roster();
        let borrowed = ["Cristiano", "David Beckham", "Lionel Messi", "Carlitos Tevez"];
        let c_name = starts_with("C");
        assert!(any_match(&owned, &c_name));
        assert!(any_match(&borrowed, &c_name));
        assert_eq!(
            filtered(&owned, &c_name).count(),
            filtered(&borrowed, &c_name).count()
        );
    }
}
