//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Combinator name other than AND/OR
    #[error("Invalid combinator '{0}': expected AND or OR")]
    InvalidCombinator(String),
}

/// Stable numeric code, mapped onto `techstore_core::ErrorCode` by the binary.
/// Range: 10xxx.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Combinator name other than AND/OR
    InvalidCombinator = 10001,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidCombinator(_) => SearchErrorCode::InvalidCombinator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = SearchError::InvalidCombinator("xor".into());
        assert_eq!(err.code(), SearchErrorCode::InvalidCombinator);
        assert_eq!(err.code() as u32, 10001);
        assert!(err.to_string().contains("'xor'"));
    }
}
