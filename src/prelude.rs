//! Prelude for convenient imports
//!
//! Re-exports the predicate traits, the factory functions, and the
//! sequence operations.
//!
//! ```rust
//! use riddle::prelude::*;
//!
//! let c_name = starts_with("C").and(len_gt(4));
//! assert!(c_name.test("Cristiano"));
//! ```

// Core traits and logical combinators
pub use crate::combinator::{is_equal, And, IsEqual, Negate, Or, Predicate, PredicateExt};

// Two-argument predicates
pub use crate::bi::{BiAnd, BiNegate, BiOr, BiPredicate, BiPredicateExt, BindSecond};

// String predicates
pub use crate::string::{
    contains_str, ends_with, is_empty, len_between, len_gt, len_max, len_min, not_empty,
    starts_with,
};

// Comparison predicates
pub use crate::ord::{between, ge, gt, le, lt, ne};

// Sequence operations
pub use crate::sequence::{all_match, any_match, filtered, none_match, remove_matching};

// Tracing integration
#[cfg(feature = "tracing")]
pub use crate::trace::{PredicateTracingExt, Traced};
