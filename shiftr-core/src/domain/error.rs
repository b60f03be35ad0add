//! Domain-level errors
//!
//! Classification and shifting themselves never fail; anything the
//! engine cannot handle degrades to a no-op. Errors only arise at the
//! edges, currently when loading a dictionary.

use thiserror::Error;

/// Errors produced while building domain state.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The dictionary file could not be read.
    #[error("failed to read dictionary file '{path}': {source}")]
    DictionaryIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary text yielded no usable blocks.
    #[error("dictionary parse error: {0}")]
    DictionaryParse(String),
}
