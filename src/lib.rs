//! # Riddle
//!
//! > *A riddle is a coarse sieve: what matters stays, the rest falls through.*
//!
//! Composable predicate combinators for filtering and querying
//! collections.
//!
//! A predicate is a single-method capability, `test(&value) -> bool`. It
//! can be built three interchangeable ways: a named type implementing
//! [`Predicate`], a closure, or a reference to an existing function.
//! Predicates compose with short-circuiting [`and`](PredicateExt::and),
//! [`or`](PredicateExt::or), [`negate`](PredicateExt::negate), and the
//! [`is_equal`] factory, and apply to sequences through conditional
//! removal, the quantifiers, and an order-preserving filter.
//!
//! ## Quick Example
//!
//! ```rust
//! use riddle::prelude::*;
//!
//! let mut players = vec!["Cristiano", "David Beckham", "Lionel Messi", "Carlitos Tevez"];
//! remove_matching(&mut players, &starts_with("C"));
//! assert_eq!(players, ["David Beckham", "Lionel Messi"]);
//!
//! let squad = ["Cristiano", "Camavinga", "Canavaro", "Cocu"];
//! assert!(all_match(&squad, &starts_with("C")));
//! assert!(none_match(&squad, &is_equal("Messi")));
//!
//! // The same abstraction at arity two
//! let longer_than = |s: &String, n: &usize| s.len() > *n;
//! assert!(longer_than.test(&String::from("Lionel Messi"), &5));
//! ```
//!
//! For a guided tour, see the `roster` demo under `demos/`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bi;
pub mod combinator;
pub mod ord;
pub mod sequence;
pub mod string;
#[cfg(feature = "tracing")]
pub mod trace;

pub mod prelude;

// Re-exports
pub use bi::{BiPredicate, BiPredicateExt};
pub use combinator::{is_equal, Predicate, PredicateExt};
pub use sequence::{all_match, any_match, filtered, none_match, remove_matching};
