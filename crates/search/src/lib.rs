//! Approximate matching and linear search for TechStore.
//!
//! This crate provides:
//! - Case- and whitespace-insensitive approximate matching
//! - Levenshtein edit distance
//! - Linear scan primitives (first match, all matches, counts)
//! - AND/OR composition of per-field checks
//!
//! # Example
//!
//! ```
//! use techstore_search::{approximate_match, linear_search_counted, Combinator};
//!
//! assert!(approximate_match("galaxy", "Samsung Galaxy S24", 0));
//!
//! let outcome = linear_search_counted(&[64, 34, 25], &25);
//! assert_eq!(outcome.index, Some(2));
//! assert_eq!(outcome.comparisons, 3);
//!
//! assert!(Combinator::Or.combine([false, true]));
//! ```

mod error;
mod fuzzy;
pub mod linear;
mod predicate;

pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{approximate_match, levenshtein_distance, match_distance, normalize};
pub use linear::{count_matching, filter_all, find_first, linear_search, linear_search_counted, LinearOutcome};
pub use predicate::Combinator;
