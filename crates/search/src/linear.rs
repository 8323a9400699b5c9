//! Linear scan primitives.
//!
//! Every function here is a single pass over a slice in source order,
//! `O(n)` time and no allocation beyond the returned collection.

use serde::Serialize;

/// Outcome of a linear search that also counts comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinearOutcome {
    /// Index of the first equal element, if any
    pub index: Option<usize>,
    /// Number of equality comparisons performed
    pub comparisons: usize,
}

impl LinearOutcome {
    /// Returns true if the element was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// Return the index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Like [`linear_search`], but also reports how many comparisons were made.
///
/// A miss always costs `items.len()` comparisons.
pub fn linear_search_counted<T: PartialEq>(items: &[T], target: &T) -> LinearOutcome {
    let mut comparisons = 0;
    for (index, item) in items.iter().enumerate() {
        comparisons += 1;
        if item == target {
            return LinearOutcome { index: Some(index), comparisons };
        }
    }
    LinearOutcome { index: None, comparisons }
}

/// Return the first element satisfying `predicate`.
pub fn find_first<T, P>(items: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().find(|item| predicate(item))
}

/// Return every element satisfying `predicate`, in source order.
pub fn filter_all<T, P>(items: &[T], mut predicate: P) -> Vec<&T>
where
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).collect()
}

/// Count the elements satisfying `predicate`.
pub fn count_matching<T, P>(items: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).count()
}
