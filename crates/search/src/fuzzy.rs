//! Approximate matching algorithms.

/// Normalize text for comparison: trim surrounding whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit distance between `query` and its closest occurrence inside `candidate`.
///
/// Both strings are normalized first. Characters of the candidate before and
/// after the aligned region cost nothing, so a query that appears verbatim
/// anywhere in the candidate has distance 0. Uses a single rolling column over
/// the query, `O(len(candidate) * len(query))` time.
pub fn match_distance(query: &str, candidate: &str) -> usize {
    let query: Vec<char> = normalize(query).chars().collect();
    let candidate = normalize(candidate);
    aligned_distance(&query, &candidate, None)
}

/// Decide whether `query` approximately occurs in `candidate`.
///
/// An empty query, or one that is a substring of the candidate after
/// normalization, matches immediately. Otherwise the query matches when
/// [`match_distance`] is at most `tolerance`.
///
/// The check is not symmetric: `"ip"` matches `"iPhone 15"` but not the
/// other way round.
///
/// # Example
/// ```
/// use techstore_search::approximate_match;
///
/// assert!(approximate_match("ip", "iPhone 15", 0));
/// assert!(approximate_match("samsng", "Samsung Galaxy S24", 1));
/// assert!(!approximate_match("iPhone 15", "ip", 0));
/// ```
pub fn approximate_match(query: &str, candidate: &str, tolerance: usize) -> bool {
    let query = normalize(query);
    let candidate = normalize(candidate);

    if query.is_empty() || candidate.contains(&query) {
        return true;
    }

    let query: Vec<char> = query.chars().collect();
    aligned_distance(&query, &candidate, Some(tolerance)) <= tolerance
}

/// Semi-global alignment of `query` against `candidate`.
///
/// `column[j]` holds the cheapest cost of aligning the first `j` query
/// characters so that the alignment ends at the current candidate position.
/// With a `limit`, returns as soon as some alignment fits within it.
fn aligned_distance(query: &[char], candidate: &str, limit: Option<usize>) -> usize {
    let n = query.len();
    if n == 0 {
        return 0;
    }

    let mut column: Vec<usize> = (0..=n).collect();
    let mut best = n;

    for c in candidate.chars() {
        // Starting the alignment at any candidate position is free.
        let mut diagonal = 0;
        for j in 1..=n {
            let above = column[j];
            let cost = usize::from(query[j - 1] != c);
            column[j] = (above + 1)
                .min(column[j - 1] + 1)
                .min(diagonal + cost);
            diagonal = above;
        }
        best = best.min(column[n]);

        if limit.is_some_and(|limit| best <= limit) {
            break;
        }
    }

    best
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tolerance_is_monotonic(a in "[a-e ]{0,8}", b in "[a-e ]{0,12}", t1 in 0usize..6, extra in 0usize..6) {
            if approximate_match(&a, &b, t1) {
                prop_assert!(approximate_match(&a, &b, t1 + extra));
            }
        }

        #[test]
        fn zero_tolerance_means_containment(a in "[a-cA-C ]{0,6}", b in "[a-cA-C ]{0,10}") {
            let expected = normalize(&b).contains(&normalize(&a));
            prop_assert_eq!(approximate_match(&a, &b, 0), expected);
        }

        #[test]
        fn levenshtein_is_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn levenshtein_identity(a in "\\PC{0,12}") {
            prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        }

        #[test]
        fn match_distance_bounded_by_levenshtein(a in "[a-z]{0,8}", b in "[a-z]{0,12}") {
            prop_assert!(match_distance(&a, &b) <= levenshtein_distance(&a, &b));
        }
    }
}
