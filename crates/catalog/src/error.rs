//! Error types for the catalog crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a catalog or building criteria.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the expected shape
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    /// A record field holds an impossible value
    #[error("Invalid record {id}: {message}")]
    InvalidRecord { id: u32, message: String },

    /// A criterion value could not be parsed
    #[error("Invalid value '{value}' for criterion '{key}'")]
    InvalidCriterion { key: String, value: String },

    /// Combinator other than AND/OR
    #[error(transparent)]
    Search(#[from] techstore_search::SearchError),
}

/// Stable numeric code, mapped onto `techstore_core::ErrorCode` by the binary.
/// Range: 11xxx.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// Catalog file could not be read
    Io = 11001,
    /// Catalog JSON parsing error
    Parse = 11002,
    /// Duplicate record id
    DuplicateId = 11003,
    /// Impossible field value
    InvalidRecord = 11004,
    /// Unparseable criterion value
    InvalidCriterion = 11005,
    /// Search error
    Search = 11006,
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CatalogErrorCode {
        match self {
            CatalogError::Io { .. } => CatalogErrorCode::Io,
            CatalogError::Parse(_) => CatalogErrorCode::Parse,
            CatalogError::DuplicateId { .. } => CatalogErrorCode::DuplicateId,
            CatalogError::InvalidRecord { .. } => CatalogErrorCode::InvalidRecord,
            CatalogError::InvalidCriterion { .. } => CatalogErrorCode::InvalidCriterion,
            CatalogError::Search(_) => CatalogErrorCode::Search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let duplicate = CatalogError::DuplicateId { kind: "product", id: 1 };
        assert_eq!(duplicate.code(), CatalogErrorCode::DuplicateId);
        assert_eq!(duplicate.code() as u32, 11003);

        let search: CatalogError = techstore_search::SearchError::InvalidCombinator("xor".into()).into();
        assert_eq!(search.code() as u32, 11006);
    }
}
