//! Error types for the public API

use thiserror::Error;

/// Error type for API operations.
///
/// Classification and shifting never produce errors; they degrade to
/// "input unchanged". Errors only come from building an engine, which
/// may load a dictionary from disk.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the domain layer (dictionary loading or parsing).
    #[error(transparent)]
    Domain(#[from] crate::domain::error::DomainError),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn test_domain_error_wraps_transparently() {
        let inner = DomainError::DictionaryParse("no valid blocks".to_string());
        let error = Error::from(inner);
        assert_eq!(error.to_string(), "dictionary parse error: no valid blocks");
    }

    #[test]
    fn test_io_error_wraps_transparently() {
        let inner = DomainError::DictionaryIo {
            path: "terms.dict".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let error = Error::from(inner);
        assert!(error.to_string().contains("terms.dict"));
    }
}
