//! Term dictionary
//!
//! The dictionary is a set of cyclic term lists scoped to file
//! extensions. Lookups run in two priority tiers: extension-specific
//! blocks first, then the remaining blocks as a global fallback, each
//! tier trying a case-sensitive pass before a case-insensitive one.
//!
//! The on-disk format is a plain-text block grammar:
//!
//! ```text
//! (|js|ts|) {
//!     |var|let|const|
//! }
//! ```
//!
//! A block header lists the extensions it applies to, `*` meaning all
//! files. Body lines are pipe-delimited term lists. Parsing is lenient:
//! malformed lines and blocks are skipped, and
//! [`Dictionary::parse_with_report`] surfaces what was skipped.

mod parser;
mod store;

pub use parser::{default_dictionary_text, ParseIssue};
pub use store::{Block, Dictionary, DictionaryHit, TermList};
